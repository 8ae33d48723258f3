//! Protobuf message definitions for pirate log payloads.
//!
//! These mirror the messages written by the measurement tool. Only this
//! module knows about field tags; the framing and aggregation code work on
//! any `prost::Message`.

/// Description of one hardware performance counter
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerfCtrInfo {
    #[prost(int32, tag = "1")]
    pub id: i32,

    #[prost(string, tag = "2")]
    pub name: String,

    /// perf_event_attr type
    #[prost(uint32, tag = "3")]
    pub r#type: u32,

    #[prost(uint64, tag = "4")]
    pub config: u64,

    #[prost(uint64, tag = "5")]
    pub config1: u64,

    #[prost(uint64, tag = "6")]
    pub config2: u64,
}

/// Counter readings taken for one process at one pirate size
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerfCtrSample {
    /// Cache size available to the target (or used by the pirate)
    #[prost(int32, tag = "1")]
    pub size: i32,

    #[prost(uint64, repeated, tag = "2")]
    pub ctr: Vec<u64>,
}

/// First record in every log
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerfHeader {
    #[prost(message, optional, tag = "1")]
    pub t_setup: Option<perf_header::TargetSetup>,

    #[prost(message, optional, tag = "2")]
    pub p_setup: Option<perf_header::PirateSetup>,

    /// Pirate counters measured without a target, used as a baseline
    #[prost(message, optional, tag = "3")]
    pub reference: Option<PerfCtrSample>,

    #[prost(bool, tag = "4")]
    pub no_reference: bool,
}

/// Nested message types of [`PerfHeader`]
pub mod perf_header {
    use super::PerfCtrInfo;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TargetSetup {
        #[prost(int32, tag = "1")]
        pub cpu: i32,

        #[prost(uint64, tag = "2")]
        pub sample_period: u64,

        /// Target command line, arguments joined by spaces
        #[prost(string, tag = "3")]
        pub command: String,

        #[prost(int32, tag = "4")]
        pub n_ctrs: i32,

        #[prost(message, repeated, tag = "5")]
        pub ctr: Vec<PerfCtrInfo>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PirateSetup {
        #[prost(int32, tag = "1")]
        pub ways: i32,

        #[prost(int32, tag = "2")]
        pub cache_size: i32,

        #[prost(int32, tag = "3")]
        pub way_size: i32,

        #[prost(int32, tag = "4")]
        pub stride: i32,

        #[prost(bool, tag = "5")]
        pub no_sweep: bool,

        #[prost(int32, tag = "6")]
        pub n_pirates: i32,

        #[prost(int32, tag = "7")]
        pub n_ctrs: i32,

        #[prost(message, repeated, tag = "8")]
        pub ctr: Vec<PerfCtrInfo>,

        /// One CPU id per pirate thread
        #[prost(int32, repeated, tag = "9")]
        pub cpu: Vec<i32>,
    }
}

/// One sample record: target counters plus one reading per pirate
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerfCtrDump {
    #[prost(message, optional, tag = "1")]
    pub t_sample: Option<PerfCtrSample>,

    #[prost(message, repeated, tag = "2")]
    pub p_sample: Vec<PerfCtrSample>,
}

impl PerfHeader {
    /// Target setup, or defaults if the field was absent
    pub fn target(&self) -> perf_header::TargetSetup {
        self.t_setup.clone().unwrap_or_default()
    }

    /// Pirate setup, or defaults if the field was absent
    pub fn pirate(&self) -> perf_header::PirateSetup {
        self.p_setup.clone().unwrap_or_default()
    }
}

impl PerfCtrDump {
    /// Aggregation key: the target's cache size for this sample
    pub fn size(&self) -> i32 {
        self.t_sample.as_ref().map_or(0, |s| s.size)
    }
}
