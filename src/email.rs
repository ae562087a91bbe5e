//! E-mail deliverability checks
//!
//! A cheap structural test followed by an MX record lookup against the
//! system resolver. Lookup and resolver failures count as invalid rather
//! than erroring, so the check is safe to call from validation paths.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::Resolver;
use tracing::debug;

/// Check whether an e-mail address has a domain that accepts mail
///
/// The address must contain exactly one `@` with non-empty parts around
/// it; only then is the domain queried for MX records.
///
/// # Example
///
/// ```rust
/// use fluent_utils::email::is_valid_domain;
///
/// // Shape failures never touch the network
/// assert!(!is_valid_domain("not-an-address"));
/// ```
pub fn is_valid_domain(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
            has_mx_records(domain)
        }
        _ => false,
    }
}

/// Check whether a domain publishes at least one MX record
///
/// Uses the system resolver configuration when available, with a public
/// default as fallback. Any resolution failure yields `false`.
pub fn has_mx_records(domain: &str) -> bool {
    let resolver = Resolver::from_system_conf().or_else(|err| {
        debug!(%err, "system resolver config unavailable, using defaults");
        Resolver::new(ResolverConfig::default(), ResolverOpts::default())
    });
    let resolver = match resolver {
        Ok(resolver) => resolver,
        Err(err) => {
            debug!(%err, "could not construct a resolver");
            return false;
        }
    };

    match resolver.mx_lookup(domain) {
        Ok(records) => records.iter().next().is_some(),
        Err(err) => {
            debug!(domain, %err, "MX lookup failed");
            false
        }
    }
}
