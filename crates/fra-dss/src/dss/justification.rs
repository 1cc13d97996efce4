use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use super::domain::{Priority, Scheme, Village};
use super::evidence::percent;
use super::scoring::is_low_water;

/// Renders a justification sentence for one village.
pub type JustificationTemplate = fn(&Village) -> String;

/// Scheme-id keyed justification templates with a generic fallback.
#[derive(Clone)]
pub struct JustificationTable {
    templates: BTreeMap<String, JustificationTemplate>,
}

impl fmt::Debug for JustificationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.templates.keys()).finish()
    }
}

impl JustificationTable {
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Templates for the nationally known schemes.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.insert("JJM", jal_jeevan_mission);
        table.insert("PMKISAN", pm_kisan);
        table.insert("CAMPA", campa);
        table.insert("MGNREGA-WC", mgnrega_water_conservation);
        table.insert("DAJGUA", dajgua);
        table
    }

    pub fn insert(&mut self, scheme_id: impl Into<String>, template: JustificationTemplate) {
        self.templates.insert(scheme_id.into(), template);
    }

    pub fn contains(&self, scheme_id: &str) -> bool {
        self.templates.contains_key(scheme_id)
    }

    pub fn render(&self, village: &Village, scheme: &Scheme, priority: Priority) -> String {
        match self.templates.get(scheme.id.as_str()) {
            Some(template) => template(village),
            None => generic(priority),
        }
    }
}

impl Default for JustificationTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_table() -> &'static JustificationTable {
    static TABLE: OnceLock<JustificationTable> = OnceLock::new();
    TABLE.get_or_init(JustificationTable::standard)
}

/// One-sentence rationale for recommending `scheme` to `village`.
pub fn build_justification(village: &Village, scheme: &Scheme, priority: Priority) -> String {
    standard_table().render(village, scheme, priority)
}

fn generic(priority: Priority) -> String {
    format!("Priority {priority} recommendation based on village indicators.")
}

fn jal_jeevan_mission(village: &Village) -> String {
    let stress = if is_low_water(village) {
        "critical"
    } else {
        "moderate"
    };
    format!(
        "{} shows {stress} water stress with {} water bodies serving {} households.",
        village.name, village.water_bodies_count, village.homestead_count
    )
}

fn pm_kisan(village: &Village) -> String {
    format!(
        "Agricultural potential of {} ha makes this village suitable for direct benefit transfer support.",
        village.agri_area_ha
    )
}

fn campa(village: &Village) -> String {
    format!(
        "Forest degradation level of {}% indicates urgent need for restoration activities.",
        percent(village.forest_degradation_level)
    )
}

fn mgnrega_water_conservation(village: &Village) -> String {
    format!(
        "Combined indicators suggest high potential for water conservation works benefiting {} households.",
        village.homestead_count
    )
}

fn dajgua(_village: &Village) -> String {
    "Multi-sectoral convergence opportunity with tribal population and diverse livelihood needs."
        .to_string()
}
