use errors::Error;

/// Name of the route that shows a single question by its slug.
pub const QUESTIONS_SHOW: &str = "questions.show";

/// Builds links to named routes. Handed to presentation code so models never
/// reach for a global router.
pub trait UrlBuilder {
    fn url_for(&self, route: &str, slug: &str) -> Result<String, Error>;
}

/// Url builder for code running outside of a request, such as the seeder.
#[derive(Clone, Debug)]
pub struct PathUrlBuilder {
    base_url: String,
}

impl PathUrlBuilder {
    pub fn new(base_url: &str) -> Self {
        PathUrlBuilder {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl UrlBuilder for PathUrlBuilder {
    fn url_for(&self, route: &str, slug: &str) -> Result<String, Error> {
        match route {
            QUESTIONS_SHOW => Ok(format!("{}/questions/{}", self.base_url, slug)),
            _ => Err(Error::UrlGenerationError(format!(
                "Route {} is not defined",
                route
            ))),
        }
    }
}
