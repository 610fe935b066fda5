//! UI actions the router turns into requests.
//!
//! The CLI reads them as one command per line:
//!
//! ```text
//! profile
//! login
//! logout
//! search <target_state> <current_state> <study_target...> [--queer]
//! complete <target> <input...>
//! ```

use std::str::FromStr;

use futureshape_core::error::ShapeError;
use futureshape_core::protocol::payload::{AutocompleteRequest, SearchRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Refresh the profile badge.
    ProfileImage,
    /// Profile button: ask the backend for an OAuth session.
    Login,
    Logout,
    Search(SearchRequest),
    Autocomplete(AutocompleteRequest),
}

impl FromStr for Intent {
    type Err = ShapeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words
            .next()
            .ok_or_else(|| ShapeError::BadInput("empty command".into()))?;
        let rest: Vec<&str> = words.collect();

        match cmd {
            "profile" => Ok(Intent::ProfileImage),
            "login" => Ok(Intent::Login),
            "logout" => Ok(Intent::Logout),
            "search" => {
                let use_queer_scoring = rest.contains(&"--queer");
                let args: Vec<&str> = rest.into_iter().filter(|w| *w != "--queer").collect();
                let [target_state, current_state, study @ ..] = args.as_slice() else {
                    return Err(ShapeError::BadInput(
                        "usage: search <target_state> <current_state> <study_target...> [--queer]".into(),
                    ));
                };
                if study.is_empty() {
                    return Err(ShapeError::BadInput("search needs a study target".into()));
                }
                Ok(Intent::Search(SearchRequest {
                    target_state: (*target_state).to_owned(),
                    current_state: (*current_state).to_owned(),
                    study_target: study.join(" "),
                    use_queer_scoring,
                }))
            }
            "complete" => {
                let [target, input @ ..] = rest.as_slice() else {
                    return Err(ShapeError::BadInput("usage: complete <target> <input...>".into()));
                };
                if input.is_empty() {
                    return Err(ShapeError::BadInput("complete needs some input".into()));
                }
                Ok(Intent::Autocomplete(AutocompleteRequest {
                    input: input.join(" "),
                    target: (*target).to_owned(),
                }))
            }
            other => Err(ShapeError::BadInput(format!("unknown command: {other}"))),
        }
    }
}
