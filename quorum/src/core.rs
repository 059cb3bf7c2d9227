use std::collections::HashMap;
use std::sync::Arc;

use quorum_core::connector::ConnectorKey;
use quorum_core::{Capability, FetchStrategy, Market, QuorumConfig, QuorumConnector, QuorumError, Ticker};

/// Orchestrator that routes requests across registered providers.
pub struct Quorum {
    pub(crate) connectors: Vec<Arc<dyn QuorumConnector>>,
    pub(crate) cfg: QuorumConfig,
}

/// Builder for constructing a `Quorum` orchestrator with custom configuration.
pub struct QuorumBuilder {
    connectors: Vec<Arc<dyn QuorumConnector>>,
    cfg: QuorumConfig,
}

impl Default for QuorumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuorumBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults are conservative: priority-with-fallback fetches and a 10s
    ///   per-provider timeout, with no overall request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: QuorumConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - The order in which you register connectors is used only when no
    ///   explicit priorities are set via [`prefer_for_market`](Self::prefer_for_market).
    /// - Multiple connectors can support the same capability; the orchestrator
    ///   routes based on priorities and the selected fetch strategy.
    /// - Duplicates are not deduplicated; avoid registering the same connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn QuorumConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for a market using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - Influences ordering among eligible providers for the given market; it
    ///   does not filter out non-listed connectors (they remain after the
    ///   listed ones).
    /// - Type-safe and ergonomic: eliminates the possibility of typos and makes
    ///   refactoring safer.
    #[must_use]
    pub fn prefer_for_market(
        mut self,
        market: Market,
        connectors_desc: &[Arc<dyn QuorumConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self.cfg.per_market_priority.insert(market, keys);
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// Behavior and trade-offs:
    /// - `PriorityWithFallback`: deterministic order, applies per-provider
    ///   timeout, aggregates errors; may be slower but predictable and
    ///   economical on rate limits.
    /// - `Latency`: race all eligible providers and return the first success;
    ///   fastest typical latency but consumes more concurrent requests.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Applied in both strategies to bound each provider call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for aggregating operations (e.g. the scorecard).
    ///
    /// When exceeded, the operation returns a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Quorum` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(mut self) -> Result<Quorum, QuorumError> {
        // Validate connector keys against registered connectors; drop unknowns and dedup.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();

        for v in self.cfg.per_market_priority.values_mut() {
            let mut out: Vec<ConnectorKey> = Vec::new();
            let mut seen: std::collections::HashSet<&'static str> =
                std::collections::HashSet::new();
            for k in v.iter().copied() {
                let n = k.as_str();
                if known.contains(n) && seen.insert(n) {
                    out.push(k);
                }
            }
            *v = out;
        }

        if self.connectors.is_empty() {
            return Err(QuorumError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Quorum {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: QuorumError) -> QuorumError {
    match e {
        e @ (QuorumError::NotFound { .. }
        | QuorumError::ProviderTimeout { .. }
        | QuorumError::Connector { .. }
        | QuorumError::Status { .. }
        | QuorumError::Translation(_)
        | QuorumError::RequestTimeout { .. }
        | QuorumError::AllProvidersTimedOut { .. }
        | QuorumError::AllProvidersFailed(_)) => e,
        other => QuorumError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Quorum {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, QuorumError>
    where
        Fut: core::future::Future<Output = Result<T, QuorumError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(QuorumError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Apply an optional overall deadline to a composite future.
    pub(crate) async fn with_request_deadline<F, T>(
        deadline: Option<std::time::Duration>,
        fut: F,
    ) -> Result<T, QuorumError>
    where
        F: core::future::Future<Output = T>,
    {
        match deadline {
            Some(d) => (tokio::time::timeout(d, fut).await)
                .map_err(|_| QuorumError::request_timeout("request")),
            None => Ok(fut.await),
        }
    }

    /// Start building a new `Quorum` instance.
    ///
    /// Typical usage chains provider registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let yahoo = Arc::new(quorum_yahoo::YahooConnector::new_default());
    /// let finnhub = Arc::new(quorum_finnhub::FinnhubConnector::new(cfg));
    ///
    /// let quorum = quorum::Quorum::builder()
    ///     .with_connector(yahoo.clone())
    ///     .with_connector(finnhub.clone())
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> QuorumBuilder {
        QuorumBuilder::new()
    }

    pub(crate) fn ordered(&self, ticker: &Ticker) -> Vec<Arc<dyn QuorumConnector>> {
        let out: Vec<(usize, Arc<dyn QuorumConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();

        if let Some(pref) = self.cfg.per_market_priority.get(&ticker.market()) {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            let mut v = out;
            v.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
            return v.into_iter().map(|(_, c)| c).collect();
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch helper shared by the router endpoints.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies per-provider timeout in both modes
    /// - Aggregates errors and treats `NotFound` specially in fallback mode
    /// - In latency mode, returns the first success; if all attempted providers
    ///   fail, aggregates and returns `AllProvidersFailed`; if no providers
    ///   support the capability, returns a capability error
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        ticker: &Ticker,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, QuorumError>
    where
        T: Send,
        F: Fn(Arc<dyn QuorumConnector>, Ticker) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, QuorumError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                self.fetch_single_priority_with_fallback(ticker, capability, not_found_label, call)
                    .await
            }
            FetchStrategy::Latency => {
                self.fetch_single_latency(ticker, capability, not_found_label, call)
                    .await
            }
            _ => {
                self.fetch_single_priority_with_fallback(ticker, capability, not_found_label, call)
                    .await
            }
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        ticker: &Ticker,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, QuorumError>
    where
        T: Send,
        F: Fn(Arc<dyn QuorumConnector>, Ticker) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, QuorumError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<QuorumError> = Vec::new();

        for c in self.ordered(ticker) {
            if let Some(fut) = call(c.clone(), ticker.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (QuorumError::NotFound { .. } | QuorumError::ProviderTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        errors.push(crate::core::tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(crate::router::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{} for {}", not_found_label, ticker.symbol())),
        ))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        ticker: &Ticker,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, QuorumError>
    where
        T: Send,
        F: Fn(Arc<dyn QuorumConnector>, Ticker) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, QuorumError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        let mut attempted_any = false;
        for c in self.ordered(ticker) {
            if let Some(fut) = call(c.clone(), ticker.clone()) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability, timeout, fut).await,
                    )
                });
                attempted_any = true;
            }
        }

        let mut errors: Vec<QuorumError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(e @ (QuorumError::ProviderTimeout { .. } | QuorumError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(crate::core::tag_err(name, e)),
            }
        }

        Err(crate::router::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{} for {}", not_found_label, ticker.symbol())),
        ))
    }
}
