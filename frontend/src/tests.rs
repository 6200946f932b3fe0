use yew_router::Routable;

use crate::Route;

#[test]
fn test_fixed_routes_are_recognized() {
    assert_eq!(Route::recognize("/"), Some(Route::Login));
    assert_eq!(Route::recognize("/overview"), Some(Route::Overview));
    assert_eq!(Route::recognize("/users"), Some(Route::Users));
    assert_eq!(Route::recognize("/activity"), Some(Route::Activity));
    assert_eq!(Route::recognize("/companies"), Some(Route::Companies));
    assert_eq!(Route::recognize("/navigation"), Some(Route::Navigation));
    assert_eq!(Route::recognize("/feedback"), Some(Route::Feedback));
    assert_eq!(Route::recognize("/onboard"), Some(Route::Onboard));
}

#[test]
fn test_email_route_binds_the_last_segment() {
    assert_eq!(
        Route::recognize("/navigation/jane@acme.com"),
        Some(Route::UserNavigation {
            email: "jane@acme.com".to_string()
        })
    );
}

#[test]
fn test_unknown_paths_fall_back_to_not_found() {
    assert_eq!(
        Route::recognize("/definitely/not/a/page"),
        Some(Route::NotFound)
    );
}

#[test]
fn test_email_route_to_path() {
    let route = Route::UserNavigation {
        email: "jane@acme.com".to_string(),
    };
    assert_eq!(route.to_path(), "/navigation/jane@acme.com");
}
