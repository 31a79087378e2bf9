//! GEDCOM tag vocabulary used by the resolvers.
//!
//! Records are kept as generic `{tag, data, children}` nodes, so new event
//! tags need no change here; these constants only name the tags that
//! resolution logic looks at directly.

pub const INDI: &str = "INDI";
pub const FAM: &str = "FAM";
pub const NAME: &str = "NAME";
pub const GIVN: &str = "GIVN";
pub const SURN: &str = "SURN";
pub const SEX: &str = "SEX";

pub const BIRT: &str = "BIRT";
pub const DEAT: &str = "DEAT";
pub const BURI: &str = "BURI";

pub const FAMC: &str = "FAMC";
pub const FAMS: &str = "FAMS";
pub const WIFE: &str = "WIFE";
pub const HUSB: &str = "HUSB";
pub const CHIL: &str = "CHIL";

pub const SOUR: &str = "SOUR";
pub const NOTE: &str = "NOTE";
pub const TITL: &str = "TITL";
pub const PERI: &str = "PERI";
pub const PAGE: &str = "PAGE";
pub const DATE: &str = "DATE";
pub const PLAC: &str = "PLAC";
pub const LABL: &str = "LABL";

/// Per-person events shown between birth and death by default.
pub const DEFAULT_PERSON_EVENT_TAGS: &[&str] = &["EDUC", "OCCU", "RESI"];

/// Family-level events resolved for each family-as-spouse by default.
pub const DEFAULT_FAMILY_EVENT_TAGS: &[&str] = &[
    "MARR", "MARB", "MARC", "MARL", "MARS", "ENGA", "DIV", "DIVF", "ANUL",
];
