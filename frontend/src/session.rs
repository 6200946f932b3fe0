use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use log::error;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::components::common_toast::{Toast, ToastContext};
use crate::config::Config;

/// Local storage key for the session flag; kept from the previous console
/// build so existing sessions survive the switch
pub const SESSION_FLAG_KEY: &str = "isAuthenticated";

/// Reads the persisted session flag. The route guard calls this on every
/// route change rather than trusting in-memory state alone.
pub fn persisted_session() -> bool {
    LocalStorage::get(SESSION_FLAG_KEY).unwrap_or(false)
}

pub fn passphrase_valid(passphrase: &str) -> bool {
    passphrase == Config::admin_passphrase()
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub authenticated: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Login,
    Logout,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login => {
                if let Err(e) = LocalStorage::set(SESSION_FLAG_KEY, true) {
                    error!("Failed to persist session flag: {}", e);
                }
                Rc::new(Self {
                    authenticated: true,
                })
            }
            SessionAction::Logout => {
                LocalStorage::delete(SESSION_FLAG_KEY);
                Rc::new(Self {
                    authenticated: false,
                })
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    /// Attempts a login and reports whether the passphrase matched.
    pub login: Callback<String, bool>,
    pub logout: Callback<()>,
}

/// Holds the unlocked/locked state for the whole app. Must sit inside the
/// toast provider because login and logout announce themselves as toasts.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let session = use_reducer_eq(|| SessionState {
        authenticated: persisted_session(),
    });

    let login = {
        let session = session.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |passphrase: String| {
            if passphrase_valid(&passphrase) {
                session.dispatch(SessionAction::Login);
                toast_context.add_toast.emit(Toast::success("Login successful!"));
                true
            } else {
                toast_context.add_toast.emit(Toast::error("Invalid password"));
                false
            }
        })
    };

    let logout = {
        let session = session.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |_: ()| {
            session.dispatch(SessionAction::Logout);
            toast_context
                .add_toast
                .emit(Toast::info("Logged out successfully"));
        })
    };

    let context = SessionContext {
        state: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_passphrase_is_accepted() {
        assert!(passphrase_valid(&Config::admin_passphrase()));
    }

    #[test]
    fn wrong_passphrase_is_rejected() {
        assert!(!passphrase_valid(""));
        assert!(!passphrase_valid("letmein"));
    }
}
