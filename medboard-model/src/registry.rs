//! Static catalog of the six entity schemas.
//!
//! The registry is a read-only lookup table built once per process. Adding
//! an entity type is a data registration here, not new control flow in the
//! renderer or the stores.

use crate::schema::{Column, EntitySchema, FieldSpec};
use medboard_types::{SectionKind, UnknownEntityType};
use std::sync::OnceLock;

/// Prime service options offered on the booking side.
pub const PRIME_OPTIONS: [&str; 3] = ["OT Comparison", "Book Application", "Call Booking"];

/// Departments a hospital or doctor can be attached to.
pub const DEPARTMENT_OPTIONS: [&str; 3] = ["Cardiology", "Dental", "Orthopedic"];

/// Read-only access to the per-section schemas.
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Looks up the schema for a section. Total: the section set is closed.
    #[must_use]
    pub fn get(kind: SectionKind) -> &'static EntitySchema {
        &registry()[kind as usize]
    }

    /// String-tag lookup for the navigation boundary. Unrecognized tags fail
    /// loudly instead of defaulting to some section.
    pub fn get_by_tag(tag: &str) -> Result<&'static EntitySchema, UnknownEntityType> {
        Ok(Self::get(tag.parse()?))
    }
}

fn registry() -> &'static [EntitySchema; 6] {
    static REGISTRY: OnceLock<[EntitySchema; 6]> = OnceLock::new();
    REGISTRY.get_or_init(|| SectionKind::ALL.map(build))
}

fn build(kind: SectionKind) -> EntitySchema {
    match kind {
        SectionKind::Service => service(),
        SectionKind::Hospital => hospital(),
        SectionKind::Doctor => doctor(),
        SectionKind::Department => department(),
        SectionKind::User => user(),
        SectionKind::Package => package(),
    }
}

fn service() -> EntitySchema {
    EntitySchema {
        kind: SectionKind::Service,
        fields: vec![
            FieldSpec::text("name", "Service Name"),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::multi_select("primeOptions", "Prime Options", &PRIME_OPTIONS),
            FieldSpec::checkbox("isActive", "Active", true),
        ],
        columns: vec![
            Column::text("name", "Name"),
            Column::text("description", "Description"),
            Column::tags("primeOptions", "Prime Options"),
            Column::status("isActive", "Status"),
            Column::actions(),
        ],
    }
}

fn hospital() -> EntitySchema {
    EntitySchema {
        kind: SectionKind::Hospital,
        fields: vec![
            FieldSpec::text("name", "Hospital Name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::tel("contact", "Contact"),
            FieldSpec::textarea("address", "Address"),
            FieldSpec::text("url", "Hospital URL"),
            FieldSpec::multi_select("departmentOptions", "Department Options", &DEPARTMENT_OPTIONS),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::checkbox("isActive", "Active", true),
        ],
        columns: vec![
            Column::text("name", "Name"),
            Column::text("email", "Email"),
            Column::text("contact", "Contact"),
            Column::text("address", "Address"),
            Column::text("url", "URL"),
            Column::tags("departmentOptions", "Departments"),
            Column::text("description", "Description"),
            Column::status("isActive", "Status"),
            Column::actions(),
        ],
    }
}

fn doctor() -> EntitySchema {
    EntitySchema {
        kind: SectionKind::Doctor,
        fields: vec![
            FieldSpec::text("doctorName", "Doctor Name"),
            FieldSpec::text("specialization", "Specialization"),
            FieldSpec::number("experience", "Experience (Years)"),
            FieldSpec::multi_select("departmentOptions", "Department Options", &DEPARTMENT_OPTIONS),
            FieldSpec::textarea("about", "About"),
            FieldSpec::checkbox("isConsultant", "Consultant", false),
        ],
        columns: vec![
            Column::text("doctorName", "Doctor Name"),
            Column::text("specialization", "Specialization"),
            Column::text("experience", "Experience (Years)"),
            Column::tags("departmentOptions", "Departments"),
            Column::text("about", "About"),
            Column::status("isConsultant", "Consultant"),
            Column::actions(),
        ],
    }
}

fn department() -> EntitySchema {
    EntitySchema {
        kind: SectionKind::Department,
        fields: vec![
            FieldSpec::text("departmentName", "Department Name"),
            FieldSpec::textarea("details", "Details"),
            FieldSpec::checkbox("isActive", "Active", true),
        ],
        columns: vec![
            Column::text("departmentName", "Department Name"),
            Column::text("details", "Details"),
            Column::status("isActive", "Status"),
            Column::actions(),
        ],
    }
}

fn user() -> EntitySchema {
    EntitySchema {
        kind: SectionKind::User,
        fields: vec![
            FieldSpec::text("user_name", "User Name"),
            FieldSpec::password("password", "Password"),
            FieldSpec::textarea("address", "Address"),
            FieldSpec::tel("mobile_no", "Mobile No"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("gender", "Gender"),
            FieldSpec::date("dob", "Date of Birth"),
            FieldSpec::text("role", "Role"),
            // Assigned by the permissions screen, not captured at creation.
            FieldSpec::text("permission", "Permission").optional(),
            FieldSpec::text("user_type", "User Type"),
        ],
        // password is deliberately not a column
        columns: vec![
            Column::text("user_name", "Username"),
            Column::text("email", "Email"),
            Column::text("mobile_no", "Mobile No"),
            Column::text("address", "Address"),
            Column::text("gender", "Gender"),
            Column::text("dob", "Date of Birth"),
            Column::text("role", "Role"),
            Column::text("permission", "Permission"),
            Column::text("user_type", "User Type"),
            Column::actions(),
        ],
    }
}

fn package() -> EntitySchema {
    EntitySchema {
        kind: SectionKind::Package,
        fields: vec![
            FieldSpec::text("item_name", "Item Name"),
            FieldSpec::number("price", "Price"),
            FieldSpec::text("room", "Room"),
            FieldSpec::checkbox("item_food_facility", "Food Facility", false),
            FieldSpec::checkbox("item_nurse_facility", "Nurse Facility", false),
            FieldSpec::checkbox("item_pick_drop", "Pick Drop", false),
            FieldSpec::checkbox("item_post_operative_care", "Post Operative Care", false),
            FieldSpec::checkbox("item_physiotherapy", "Physiotherapy", false),
        ],
        columns: vec![
            Column::text("item_name", "Item Name"),
            Column::text("price", "Price"),
            Column::text("room", "Room"),
            Column::status("item_food_facility", "Food Facility"),
            Column::status("item_nurse_facility", "Nurse Facility"),
            Column::status("item_pick_drop", "Pick & Drop"),
            Column::status("item_post_operative_care", "Post Operative Care"),
            Column::status("item_physiotherapy", "Physiotherapy"),
            Column::actions(),
        ],
    }
}
