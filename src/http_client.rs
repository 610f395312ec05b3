use reqwest::Client;
use url::Url;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;

        Ok(Self { client })
    }

    /// Fetch the body of `url` as text.
    /// 4xx and 5xx statuses are errors; other statuses pass through.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::HttpError(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(body)
    }
}

#[derive(Debug)]
pub enum FetchError {
    InvalidUrl(url::ParseError),
    UnsupportedScheme(String),
    HttpError(u16),
    RequestError(reqwest::Error),
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::RequestError(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            FetchError::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported URL scheme: {}", scheme)
            }
            FetchError::HttpError(code) => write!(f, "HTTP error: {}", code),
            FetchError::RequestError(e) => write!(f, "Request error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}
