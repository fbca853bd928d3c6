//! Fixed UI copy shared by the web frontend and the text renderer

pub const BACK_LABEL: &str = "Zurück zum Portfolio";
pub const NOT_FOUND_MESSAGE: &str = "Projekt nicht gefunden";
pub const DURATION_LABEL: &str = "Dauer";

pub const CHALLENGES_LABEL: &str = "Hauptherausforderungen:";
pub const DATASET_LABEL: &str = "Dataset";
pub const TOOLS_LABEL: &str = "Tools & Technologien";
pub const METHODOLOGY_LABEL: &str = "Methodisches Vorgehen:";
pub const FEATURES_LABEL: &str = "Implementierte Features:";
pub const INSIGHTS_LABEL: &str = "Wichtigste Erkenntnisse:";
pub const POSITIVES_LABEL: &str = "Was gut lief";
pub const IMPROVEMENTS_LABEL: &str = "Wie würd' ich's beim nächsten Mal besser machen";

pub const DETAILS_BUTTON: &str = "Details ansehen";
pub const CASE_STUDIES_BUTTON: &str = "Case Studies";
