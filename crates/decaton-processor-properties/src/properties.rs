// crates/decaton-processor-properties/src/properties.rs
// ============================================================================
// Module: Processor Properties Catalog
// Description: The fixed set of Decaton processor properties.
// Purpose: Declare every property once and expose the ordered registry.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every processor property is a `const` [`PropertyDefinition`]. The order of
//! the registry returned by [`processor_properties`] is the order of
//! `required` and `properties` in generated schemas.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::PropertyError;
use crate::definition::PropertyDefinition;
use crate::registry::PropertyRegistry;
use crate::value_type::EnumType;
use crate::value_type::PropertyType;
use crate::value_type::ValueType;

// ============================================================================
// SECTION: Value Types
// ============================================================================

/// Runtime used to execute sub-partition processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubPartitionRuntime {
    /// Fixed platform thread per sub-partition.
    ThreadPool,
    /// Virtual thread per key.
    VirtualThread,
}

impl SubPartitionRuntime {
    /// Serialized variant names, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["THREAD_POOL", "VIRTUAL_THREAD"];
}

impl PropertyType for SubPartitionRuntime {
    fn value_type() -> ValueType {
        ValueType::Enum(EnumType {
            name: "SubPartitionRuntime",
            variants: Self::VARIANTS,
        })
    }
}

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Rate limit value disabling throttling.
pub const RATE_UNLIMITED: i64 = -1;

/// Largest accepted processing rate per second.
pub const RATE_MAX: i64 = 1_000_000_000;

// ============================================================================
// SECTION: Validators
// ============================================================================

/// Accepts any value.
const fn any<T>(_: &T) -> bool {
    true
}

/// Accepts strictly positive integers.
const fn positive_int(value: &i32) -> bool {
    *value > 0
}

/// Accepts non-negative longs.
const fn non_negative_long(value: &i64) -> bool {
    *value >= 0
}

/// Accepts rate values: unlimited, paused (0) or a positive rate up to the cap.
const fn rate(value: &i64) -> bool {
    *value >= RATE_UNLIMITED && *value <= RATE_MAX
}

/// Accepts a timeout in milliseconds, where `-1` disables the timeout.
const fn optional_timeout(value: &i64) -> bool {
    *value >= -1
}

// ============================================================================
// SECTION: Definitions
// ============================================================================

/// Keys whose records are skipped without processing.
pub const CONFIG_IGNORE_KEYS: PropertyDefinition<Vec<String>> =
    PropertyDefinition::define("decaton.ignore.keys", Vec::new(), any);

/// Maximum records processed per second per partition.
pub const CONFIG_PROCESSING_RATE: PropertyDefinition<i64> =
    PropertyDefinition::define("decaton.processing.rate.per.partition", RATE_UNLIMITED, rate);

/// Number of concurrent processing threads per partition.
pub const CONFIG_PARTITION_CONCURRENCY: PropertyDefinition<i32> =
    PropertyDefinition::define("decaton.partition.concurrency", 1, positive_int);

/// Maximum records kept pending per partition before fetching pauses.
pub const CONFIG_MAX_PENDING_RECORDS: PropertyDefinition<i32> =
    PropertyDefinition::define("decaton.max.pending.records", 10_000, positive_int);

/// Interval between offset commits.
pub const CONFIG_COMMIT_INTERVAL_MS: PropertyDefinition<i64> =
    PropertyDefinition::define("decaton.commit.interval.ms", 1_000, non_negative_long);

/// Time allowed for in-flight tasks to finish during a rebalance.
pub const CONFIG_GROUP_REBALANCE_TIMEOUT_MS: PropertyDefinition<i64> =
    PropertyDefinition::define("decaton.group.rebalance.timeout.ms", 1_000, non_negative_long);

/// Time allowed for in-flight tasks to finish during shutdown.
pub const CONFIG_SHUTDOWN_TIMEOUT_MS: PropertyDefinition<i64> =
    PropertyDefinition::define("decaton.processing.shutdown.timeout.ms", 0, non_negative_long);

/// Whether task metadata is exposed through the logging MDC.
pub const CONFIG_LOGGING_MDC_ENABLED: PropertyDefinition<bool> =
    PropertyDefinition::define("decaton.logging.mdc.enabled", true, any);

/// Whether Kafka client metrics are bound to the metrics registry.
pub const CONFIG_BIND_CLIENT_METRICS: PropertyDefinition<bool> =
    PropertyDefinition::define("decaton.client.metrics.micrometer.bound", false, any);

/// Timeout after which a deferred completion is forcibly completed.
pub const CONFIG_DEFERRED_COMPLETE_TIMEOUT_MS: PropertyDefinition<i64> =
    PropertyDefinition::define("decaton.deferred.complete.timeout.ms", -1, optional_timeout);

/// Time allowed for processor threads to terminate.
pub const CONFIG_PROCESSOR_THREADS_TERMINATION_TIMEOUT_MS: PropertyDefinition<i64> =
    PropertyDefinition::define(
        "decaton.processor.threads.termination.timeout.ms",
        i64::MAX,
        non_negative_long,
    );

/// Per-key processing rate above which tasks are routed to the shaping topic.
pub const CONFIG_PER_KEY_QUOTA_PROCESSING_RATE: PropertyDefinition<i64> =
    PropertyDefinition::define("decaton.per.key.quota.processing.rate", RATE_UNLIMITED, rate);

/// Whether retry tasks are produced in the legacy wire format.
pub const CONFIG_RETRY_TASK_IN_LEGACY_FORMAT: PropertyDefinition<bool> =
    PropertyDefinition::define("decaton.retry.task.in.legacy.format", false, any);

/// Whether tasks failing to parse fall back to the legacy format.
pub const CONFIG_LEGACY_PARSE_FALLBACK_ENABLED: PropertyDefinition<bool> =
    PropertyDefinition::define("decaton.legacy.parse.fallback.enabled", false, any);

/// Runtime executing sub-partition processors.
pub const CONFIG_SUBPARTITION_RUNTIME: PropertyDefinition<SubPartitionRuntime> =
    PropertyDefinition::define(
        "decaton.subpartition.runtime",
        SubPartitionRuntime::ThreadPool,
        any,
    );

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Builds the processor-properties registry.
///
/// # Errors
///
/// Returns [`PropertyError`] when a default fails its validator or a name is
/// duplicated.
pub fn processor_properties() -> Result<PropertyRegistry, PropertyError> {
    PropertyRegistry::new(vec![
        CONFIG_IGNORE_KEYS.entry()?,
        CONFIG_PROCESSING_RATE.entry()?,
        CONFIG_PARTITION_CONCURRENCY.entry()?,
        CONFIG_MAX_PENDING_RECORDS.entry()?,
        CONFIG_COMMIT_INTERVAL_MS.entry()?,
        CONFIG_GROUP_REBALANCE_TIMEOUT_MS.entry()?,
        CONFIG_SHUTDOWN_TIMEOUT_MS.entry()?,
        CONFIG_LOGGING_MDC_ENABLED.entry()?,
        CONFIG_BIND_CLIENT_METRICS.entry()?,
        CONFIG_DEFERRED_COMPLETE_TIMEOUT_MS.entry()?,
        CONFIG_PROCESSOR_THREADS_TERMINATION_TIMEOUT_MS.entry()?,
        CONFIG_PER_KEY_QUOTA_PROCESSING_RATE.entry()?,
        CONFIG_RETRY_TASK_IN_LEGACY_FORMAT.entry()?,
        CONFIG_LEGACY_PARSE_FALLBACK_ENABLED.entry()?,
        CONFIG_SUBPARTITION_RUNTIME.entry()?,
    ])
}
