use outcome::{ErrorDetail, ErrorStatus, Failure, Outcome, RedirectStatus, Redirection, Success, SuccessStatus};
use serde_json::json;

/// Pretend lookup handler: even ids exist, id 0 redirects to the archive,
/// odd ids are missing.
fn find_user(id: u32) -> Outcome<String> {
    if id == 0 {
        return Redirection::new(RedirectStatus::MovedPermanently)
            .metadata(json!({"location": "/archive/users"}))
            .into();
    }
    if id % 2 == 0 {
        return Success::with_value(SuccessStatus::Ok, format!("user-{}", id)).into();
    }
    Failure::from_detail(
        ErrorStatus::NotFound,
        ErrorDetail::new(format!("no user with id {}", id)).with_code("E-USER-404"),
    )
    .into()
}

fn create_user(name: &str) -> Outcome<String> {
    if name.is_empty() {
        // Bare details take the generic 400 promotion.
        return Outcome::from_detail(ErrorDetail::new("name is required").with_code("E-REQ"));
    }
    Success::with_value(SuccessStatus::Created, format!("id-{}", name.len())).into()
}

/// Stand-in for a framework adapter: folds the outcome into a status line
/// and body. The real mapping to headers and wire bytes lives outside the
/// crate.
fn render(outcome: Outcome<String>) -> String {
    outcome.fold(
        |code, value, _| format!("HTTP/1.1 {}\n\n{}", code, value.unwrap_or_default()),
        |code, metadata| format!("HTTP/1.1 {}\n\n{:?}", code, metadata),
        |code, details, _| {
            format!(
                "HTTP/1.1 {}\n\n{}",
                code,
                serde_json::to_string(&details).unwrap_or_default()
            )
        },
    )
}

fn main() {
    env_logger::init();

    for id in [0, 2, 3] {
        println!("GET /users/{}\n{}\n", id, render(find_user(id)));
    }
    println!("POST /users\n{}\n", render(create_user("")));
    println!("POST /users\n{}\n", render(create_user("john")));
}
