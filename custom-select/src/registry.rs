//! Target resolution and per-element init/destroy fan-out.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use selectdom::{Document, Selector};

use crate::binding::{self, Instance, SharedInstance};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::overlay::class;

/// What a controller binds to. Resolved once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single host element.
    Element(String),
    /// An explicit collection of host elements.
    Elements(Vec<String>),
    /// A selector re-resolved against the document on every `init`/`destroy`.
    Selector(String),
}

impl Target {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }

    pub fn elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Elements(ids.into_iter().map(Into::into).collect())
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    fn validate(&self, doc: &Document) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidTarget { reason });
        match self {
            Self::Element(id) if !doc.exists(id) => invalid(format!("no element '{id}'")),
            Self::Element(_) => Ok(()),
            Self::Elements(ids) if ids.is_empty() => invalid("empty element collection".into()),
            Self::Elements(ids) => match ids.iter().find(|id| !doc.exists(id)) {
                Some(id) => invalid(format!("no element '{id}' in collection")),
                None => Ok(()),
            },
            Self::Selector(s) => match Selector::parse(s) {
                Ok(_) => Ok(()),
                Err(e) => invalid(e.to_string()),
            },
        }
    }

    /// Host ids this target currently names.
    pub fn resolve(&self, doc: &Document) -> Result<Vec<String>> {
        match self {
            Self::Element(id) => Ok(vec![id.clone()]),
            Self::Elements(ids) => Ok(ids.clone()),
            Self::Selector(s) => Ok(doc.query_selector_all(s)?),
        }
    }
}

/// Outcome of one `init` pass. Failures are per element.
#[derive(Debug, Default)]
pub struct InitReport {
    initialized: Vec<String>,
    failures: Vec<(String, Error)>,
}

impl InitReport {
    /// Hosts bound during this pass, in resolution order.
    pub fn initialized(&self) -> &[String] {
        &self.initialized
    }

    /// Hosts that failed, with the reason.
    pub fn failures(&self) -> &[(String, Error)] {
        &self.failures
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The public controller: binds custom overlays to every host its target
/// resolves to and owns the resulting instances.
///
/// Initializing a host that already carries an overlay is rejected for that
/// host with [`Error::AlreadyInitialized`]; other hosts are unaffected.
#[derive(Debug)]
pub struct CustomSelect {
    target: Target,
    config: Config,
    instances: Vec<SharedInstance>,
    last_report: Option<InitReport>,
}

impl CustomSelect {
    /// Validate `target` and, unless `config.init` is false, initialize.
    ///
    /// Fails only for an invalid target; per-element init failures are
    /// recorded in [`last_report`](Self::last_report).
    pub fn new(doc: &mut Document, target: Target, config: Config) -> Result<Self> {
        target.validate(doc)?;

        let mut controller = Self {
            target,
            config,
            instances: Vec::new(),
            last_report: None,
        };
        if controller.config.init {
            controller.init(doc)?;
        }
        Ok(controller)
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Report of the most recent `init` pass.
    pub fn last_report(&self) -> Option<&InitReport> {
        self.last_report.as_ref()
    }

    /// Initialize every host the target resolves to.
    ///
    /// Each host is handled independently; a failure is recorded and the
    /// rest of the batch continues.
    pub fn init(&mut self, doc: &mut Document) -> Result<&InitReport> {
        let hosts = self.target.resolve(doc)?;
        let mut report = InitReport::default();

        for host in hosts {
            match self.init_element(doc, &host) {
                Ok(()) => report.initialized.push(host),
                Err(e) => {
                    log::warn!("[registry] init {host} failed: {e}");
                    report.failures.push((host, e));
                }
            }
        }

        log::debug!(
            "[registry] init: {} bound, {} failed",
            report.initialized.len(),
            report.failures.len()
        );
        Ok(&*self.last_report.insert(report))
    }

    fn init_element(&mut self, doc: &mut Document, host: &str) -> Result<()> {
        if !doc.exists(host) {
            return Err(selectdom::DomError::UnknownNode(host.to_string()).into());
        }
        if doc.has_class(host, class::INITIALIZED) {
            return Err(Error::AlreadyInitialized {
                host: host.to_string(),
            });
        }

        let instance = Rc::new(RefCell::new(Instance::create(doc, host, &self.config)?));
        binding::bind(doc, &instance, &self.config);
        self.instances.push(instance);
        doc.add_class(host, class::INITIALIZED);

        if let Some(after_init) = &self.config.after_init {
            after_init();
        }
        Ok(())
    }

    /// Reverse initialization on every host the target resolves to.
    /// Returns the number of hosts torn down.
    ///
    /// Hosts this controller owns are torn down through their instance.
    /// Hosts still carrying an overlay from another, possibly dropped,
    /// controller are torn down structurally.
    pub fn destroy(&mut self, doc: &mut Document) -> Result<usize> {
        let hosts = self.target.resolve(doc)?;
        let mut destroyed = 0;

        for host in &hosts {
            let Some(pos) = self
                .instances
                .iter()
                .position(|i| i.borrow().host() == host)
            else {
                let bound = doc.has_class(host, class::INITIALIZED)
                    || doc.find_by_class(host, class::SELECT).is_some();
                if bound {
                    log::debug!("[registry] destroy {host}: not owned here, tearing down");
                    binding::teardown_host(doc, host)?;
                    destroyed += 1;
                }
                continue;
            };
            let instance = self.instances.remove(pos);
            instance.borrow_mut().teardown(doc)?;
            destroyed += 1;
        }

        log::debug!("[registry] destroyed {destroyed} hosts");
        Ok(destroyed)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Hosts with a live instance, in init order.
    pub fn hosts(&self) -> Vec<String> {
        self.instances
            .iter()
            .map(|i| i.borrow().host().to_string())
            .collect()
    }

    /// The live instance bound to `host`.
    pub fn instance(&self, host: &str) -> Option<Ref<'_, Instance>> {
        self.instances
            .iter()
            .find(|i| i.borrow().host() == host)
            .map(|i| i.borrow())
    }
}
