use crate::errors::ServerError;
use crate::flash;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

fn html_builder(status: u16) -> astra::ResponseBuilder {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
}

pub fn html_response(markup: Markup) -> ResultResp {
    html_builder(200)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Page that consumed the flash cookie: the same response expires it.
pub fn html_response_clearing_flash(markup: Markup, consumed: bool) -> ResultResp {
    let mut builder = html_builder(200);
    if consumed {
        builder = builder.header("Set-Cookie", flash::clear_cookie());
    }
    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
