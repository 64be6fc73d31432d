//! Fixed requirement registries as compile-time constants.
//!
//! These encode the information requirements that hold for every model
//! regardless of what the per-project catalog says: the attribute that
//! classifies an element, the property sets every element must carry,
//! and the project-level identification set.

/// A (attribute, property set) pair required on every element,
/// unconditional on type key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedRule {
    pub parameter: &'static str,
    pub pset: &'static str,
}

/// The element-level fixed requirement set.
pub static FIXED_RULES: &[FixedRule] = &[
    FixedRule { parameter: "NomeOpera", pset: "Identità" },
    FixedRule { parameter: "ParteOpera", pset: "Identità" },
    FixedRule { parameter: "NomeOggetto", pset: "Identità" },
    FixedRule { parameter: "GUID", pset: "Identità" },
    FixedRule { parameter: "Disciplina", pset: "Identità" },
    FixedRule { parameter: "Tipologia", pset: "Identità" },
    FixedRule { parameter: "WBS7OperaPrincipale", pset: "Identità" },
    FixedRule { parameter: "WBS8TrattoOpera", pset: "Identità" },
    FixedRule { parameter: "WBS9ParteOpera", pset: "Identità" },
    FixedRule { parameter: "CodiceIdentità", pset: "Identità" },
    FixedRule { parameter: "FaseProgetto", pset: "Identità" },
    FixedRule { parameter: "PrezzarioDiRiferimento", pset: "Informazioni costi" },
    FixedRule { parameter: "IDCronoprogramma", pset: "Informazioni tempi" },
];

/// The attribute whose value classifies an element for catalog lookup.
pub static TYPE_KEY_ATTRIBUTE: &str = "NomeOggetto";

/// The property set the project-level check inspects.
pub static PROJECT_PSET: &str = "Informazioni progetto";

/// Attributes required inside [`PROJECT_PSET`] on every project root.
pub static PROJECT_REQUIRED: &[&str] = &[
    "NomeModello",
    "Revisione",
    "DataRevisione",
    "LivelloDiProgettazione",
];

/// The rule configuration a validation run operates under.
///
/// [`Rules::default`] is the standard registry above; tests and callers
/// with bespoke delivery standards can substitute their own tables.
#[derive(Clone, Debug)]
pub struct Rules {
    pub type_key_attribute: &'static str,
    pub fixed: &'static [FixedRule],
    pub project_pset: &'static str,
    pub project_required: &'static [&'static str],
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            type_key_attribute: TYPE_KEY_ATTRIBUTE,
            fixed: FIXED_RULES,
            project_pset: PROJECT_PSET,
            project_required: PROJECT_REQUIRED,
        }
    }
}

impl Rules {
    /// Whether the fixed set permits `parameter` inside `pset`.
    pub fn fixed_allows(&self, pset: &str, parameter: &str) -> bool {
        self.fixed
            .iter()
            .any(|r| r.pset == pset && r.parameter == parameter)
    }
}
