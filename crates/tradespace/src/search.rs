//! Tradespace search requests
//!
//! A [`TradespaceSearch`] bundles the mission context, the design space and
//! the analysis settings. Only the design space drives enumeration; the
//! settings are carried through for downstream analysis.

use entity::{Entity, EntityType, TypeTag, lenient};
use serde::{Deserialize, Serialize};

use crate::design_space::DesignSpace;
use crate::mission::MissionConcept;

entity::enumeration! {
    /// How the tradespace is explored
    pub enum SearchStrategy as "search strategy" {
        /// Full factorial
        FullFactorial => "FF",
        /// Genetic algorithm
        GeneticAlgorithm => "GA",
        /// Knowledge-driven optimization
        KnowledgeDriven => "KDO",
    }
}

/// Genetic-algorithm parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<SearchParameters>,
    /// Maximum number of function evaluations
    #[serde(rename = "maxNFE", default, skip_serializing_if = "Option::is_none")]
    pub max_nfe: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_size: Option<u32>,
    /// Dominance archive epsilons, one per objective
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilons: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_tournament: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_crossover: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_mutation: Option<f64>,
    /// Credit update learning rate for adaptive operator selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Probability update learning rate for adaptive operator selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// Minimum operator selection probability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_min: Option<f64>,
    /// Domain-independent operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i_operators: Option<Vec<String>>,
    /// Domain-dependent operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d_operators: Option<Vec<String>>,
    /// Evaluations between rule-mining passes
    #[serde(rename = "nfeTriggerDM", default, skip_serializing_if = "Option::is_none")]
    pub nfe_trigger_dm: Option<u32>,
    /// Operators replaced after each rule-mining pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_oper_repl: Option<u32>,
}

impl EntityType for SearchParameters {
    const TYPE: &'static str = "SearchParameters";
}

impl Entity for SearchParameters {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(SearchParameters);

/// Time step for recorded spacecraft observations.
///
/// `true` records at the simulation step, `false` disables the output and a
/// string is an explicit ISO 8601 step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObsTimeStep {
    Enabled(bool),
    Step(String),
}

impl Default for ObsTimeStep {
    fn default() -> Self {
        ObsTimeStep::Enabled(true)
    }
}

/// Toggles for intermediate analysis outputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutputs {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<AnalysisOutputs>,
    #[serde(default)]
    pub obs_time_step: ObsTimeStep,
}

impl EntityType for AnalysisOutputs {
    const TYPE: &'static str = "AnalysisOutputs";
}

impl Entity for AnalysisOutputs {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(AnalysisOutputs);

fn default_true() -> bool {
    true
}

fn default_search_strategy() -> Option<SearchStrategy> {
    Some(SearchStrategy::FullFactorial)
}

/// Options for the downstream analysis tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSettings {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<AnalysisSettings>,
    /// Propulsion offsets drag when enabled
    #[serde(default = "default_true")]
    pub include_propulsion: bool,
    #[serde(default)]
    pub outputs: AnalysisOutputs,
    #[serde(
        default = "default_search_strategy",
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_strategy: Option<SearchStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_parameters: Option<SearchParameters>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            id: None,
            type_tag: TypeTag::new(),
            include_propulsion: true,
            outputs: AnalysisOutputs::default(),
            search_strategy: default_search_strategy(),
            search_parameters: None,
        }
    }
}

impl EntityType for AnalysisSettings {
    const TYPE: &'static str = "AnalysisSettings";
}

impl Entity for AnalysisSettings {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(AnalysisSettings);

/// A complete tradespace search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradespaceSearch {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<TradespaceSearch>,
    #[serde(default)]
    pub mission: MissionConcept,
    #[serde(default)]
    pub design_space: DesignSpace,
    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl EntityType for TradespaceSearch {
    const TYPE: &'static str = "TradespaceSearch";
}

impl Entity for TradespaceSearch {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(TradespaceSearch);
