use std::future::Future;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;

use crate::error::{FetchError, ProbeError};
use crate::location::{GeoLocator, Locate};
use crate::models::{LocationLine, ProbeReport, ProbeRequest, ProbeResponse, ProbeSource, ProtocolKind};
use crate::parser::domain::{HostResolver, SystemResolver};
use crate::parser::subparser::select_config_line;
use crate::parser::ConfigParser;
use crate::settings::Settings;
use crate::utils::http::{build_client, web_get_async, HttpConfig};

/// Source of subscription feed bodies.
pub trait FeedSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Downloads feeds over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: Client,
}

impl HttpFeed {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        Ok(HttpFeed {
            client: build_client(config)?,
        })
    }
}

impl FeedSource for HttpFeed {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        web_get_async(&self.client, url)
    }
}

/// Runs one probe request end to end: feed, line selection, address
/// extraction and location lookup.
pub struct Prober<F = HttpFeed, R = SystemResolver, L = GeoLocator> {
    feed: F,
    parser: ConfigParser<R>,
    /// `None` disables location lookups.
    locator: Option<L>,
}

impl Prober {
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let http = HttpConfig::from(settings);
        Ok(Prober {
            feed: HttpFeed::new(&http)?,
            parser: ConfigParser::new(),
            locator: Some(GeoLocator::new(&settings.geo_base_url, &http)?),
        })
    }
}

impl<F, R, L> Prober<F, R, L>
where
    F: FeedSource,
    R: HostResolver,
    L: Locate,
{
    pub fn new(feed: F, parser: ConfigParser<R>, locator: Option<L>) -> Self {
        Prober {
            feed,
            parser,
            locator,
        }
    }

    /// Stops looking up server locations; reports show `-` instead.
    pub fn without_location(mut self) -> Self {
        self.locator = None;
        self
    }

    pub async fn probe(&self, request: &ProbeRequest) -> ProbeResponse {
        info!("Starting probe {}", request.id);
        let outcome = self.run(request).await;
        if let Err(e) = &outcome {
            info!("Probe {} failed: {}", request.id, e);
        }
        ProbeResponse {
            request_id: request.id,
            outcome,
        }
    }

    async fn run(&self, request: &ProbeRequest) -> Result<ProbeReport, ProbeError> {
        let config = match &request.source {
            ProbeSource::Subscription(url) => {
                let content = self.feed.fetch(url).await?;
                let mut rng = StdRng::seed_from_u64(request.seed);
                select_config_line(&content, &mut rng)
                    .ok_or(ProbeError::NoValidConfig)?
                    .to_string()
            }
            ProbeSource::Link(link) => link.trim().to_string(),
        };
        Ok(self.probe_config(config).await)
    }

    /// Extracts and locates the server of a single config line.
    pub async fn probe_config(&self, config: String) -> ProbeReport {
        let kind = ProtocolKind::detect(&config);

        let ip = match self.parser.extract_ip(&config).await {
            Ok(extraction) => {
                debug!("{} found via {}", extraction.ip, extraction.source);
                Some(extraction.ip)
            }
            Err(e) => {
                debug!("{}", e);
                None
            }
        };

        let location = match (ip, &self.locator) {
            (None, _) => LocationLine::NoIpDetected,
            (Some(_), None) => LocationLine::Skipped,
            (Some(ip), Some(locator)) => match locator.locate(ip).await {
                Ok(summary) => LocationLine::Found(summary.to_string()),
                Err(failure) => LocationLine::Failed(failure.to_string()),
            },
        };

        ProbeReport {
            config,
            kind,
            ip,
            location,
        }
    }
}
