use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Unit recorded on a donation when none is supplied.
pub const DEFAULT_UNIT: &str = "pieces";

pub(crate) fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}
