use actix_web::HttpRequest;

use db::UrlBuilder;
use errors::Error;

/// Resolves named routes against the app's resource map.
pub struct RequestUrls<'a>(pub &'a HttpRequest);

impl<'a> UrlBuilder for RequestUrls<'a> {
    fn url_for(&self, route: &str, slug: &str) -> Result<String, Error> {
        self.0
            .url_for(route, &[slug])
            .map(|url| url.to_string())
            .map_err(|err| Error::UrlGenerationError(err.to_string()))
    }
}
