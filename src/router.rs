use crate::analyze::{analyze_route, AppState};
use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::templates;
use astra::Request;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        // Method enforcement happens inside the pipeline (405, not 404).
        (_, "/api/analyze") => Ok(analyze_route(req, state)),

        _ => Err(ServerError::NotFound),
    }
}
