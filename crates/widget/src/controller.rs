//! Widget controller: one resolve-and-render cycle per marker element.
//!
//! Elements are processed concurrently on the calling task. Nothing is
//! shared between cycles except the idempotent style injection, and a cycle
//! that has started always renders; there is no cancellation.

use futures::future::join_all;
use trustable_client::{ScoreError, ScoreResolver};
use trustable_config::Settings;
use trustable_core::ScoreRecord;

use crate::config::{Variant, WidgetConfig};
use crate::host::{is_marker, HostPage, MarkerElement};
use crate::render::Renderer;
use crate::style::ensure_styles;

/// What happened to one marker element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered { record: ScoreRecord, variant: Variant },
    /// No `data-brand`; an inline error was rendered and nothing was fetched.
    MissingBrand,
}

pub struct Widget {
    resolver: ScoreResolver,
    renderer: Renderer,
}

impl Widget {
    pub fn new(resolver: ScoreResolver, renderer: Renderer) -> Self {
        Self { resolver, renderer }
    }

    /// Widget bound to the endpoints in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ScoreError> {
        Ok(Self::new(
            ScoreResolver::for_api(settings.api_base.clone())?,
            Renderer::new(settings.site_url.clone()),
        ))
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn resolver(&self) -> &ScoreResolver {
        &self.resolver
    }

    /// Inject styles (once per page) and initialize every marker element.
    ///
    /// Safe to call repeatedly, e.g. after markers are inserted dynamically:
    /// the stylesheet is never duplicated. Already-rendered markers are
    /// rendered again.
    pub async fn init_all<P: HostPage>(&self, page: &mut P) -> Vec<Outcome> {
        ensure_styles(page);

        let markers: Vec<P::Element> = page
            .elements()
            .into_iter()
            .filter(|el| is_marker(el))
            .collect();
        log::debug!("initializing {} widget marker(s)", markers.len());

        join_all(markers.into_iter().map(|el| self.init_one(el))).await
    }

    /// Initialize a single element the caller found itself.
    ///
    /// Does not touch page styles; pair with [`ensure_styles`] when the
    /// page-wide initializer is not used.
    pub async fn init_one<E: MarkerElement>(&self, mut element: E) -> Outcome {
        let config = match WidgetConfig::from_element(&element) {
            Ok(config) => config,
            Err(e) => {
                self.renderer.render_config_error(&mut element, &e);
                return Outcome::MissingBrand;
            }
        };

        self.renderer.render_loading(&mut element);

        let record = self
            .resolver
            .resolve(&config.brand, config.credential.as_deref())
            .await;
        self.renderer.render(&mut element, &record, config.variant);

        Outcome::Rendered {
            record,
            variant: config.variant,
        }
    }
}
