use crate::errors::ServerError;
use crate::flash::FlashEnvelope;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Post/redirect/get, carrying the flash for the next page.
pub fn redirect_with_flash(location: &str, envelope: &FlashEnvelope) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", envelope.set_cookie())
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// htmx fragments cannot answer with a 3xx; `HX-Redirect` makes the client
/// navigate instead of swapping.
pub fn hx_redirect_with_flash(location: &str, envelope: &FlashEnvelope) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("HX-Redirect", location)
        .header("Set-Cookie", envelope.set_cookie())
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
