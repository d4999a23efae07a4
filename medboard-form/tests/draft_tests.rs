use medboard_form::{FieldInput, FormDraft, FormError};
use medboard_model::{FieldMap, Record, SchemaRegistry};
use medboard_types::{RecordId, SectionKind};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn doctor_record() -> Record {
    let mut fields = FieldMap::new();
    fields.insert("doctorName".into(), json!("Dr. Ayesha Rahman"));
    fields.insert("specialization".into(), json!("Cardiology"));
    fields.insert("experience".into(), json!("15"));
    fields.insert("departmentOptions".into(), json!(["Cardiology"]));
    fields.insert("about".into(), json!("Senior consultant"));
    fields.insert("isConsultant".into(), json!(true));
    Record::new(
        RecordId::from_string("doctor_000000001"),
        SectionKind::Doctor,
        fields,
    )
}

// ── Opening ──────────────────────────────────────────────────────

#[test]
fn create_draft_starts_from_defaults() {
    let draft = FormDraft::open(SectionKind::Service, None);
    assert_eq!(draft.get("name"), Some(&json!("")));
    assert_eq!(draft.get("primeOptions"), Some(&json!([])));
    assert_eq!(draft.get("isActive"), Some(&json!(true)));
}

#[test]
fn edit_draft_overlays_the_record() {
    let record = doctor_record();
    let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    assert_eq!(draft.get("doctorName"), Some(&json!("Dr. Ayesha Rahman")));
    assert_eq!(draft.get("experience"), Some(&json!("15")));
    assert_eq!(draft.get("isConsultant"), Some(&json!(true)));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    // a record written before a schema gained fields
    let mut fields = FieldMap::new();
    fields.insert("doctorName".into(), json!("Dr. Basu"));
    let record = Record::new(
        RecordId::from_string("doctor_000000002"),
        SectionKind::Doctor,
        fields,
    );

    let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    assert_eq!(draft.get("doctorName"), Some(&json!("Dr. Basu")));
    assert_eq!(draft.get("specialization"), Some(&json!("")));
    assert_eq!(draft.get("departmentOptions"), Some(&json!([])));
    assert_eq!(draft.get("isConsultant"), Some(&json!(false)));
}

#[test]
fn boolean_fields_are_coerced_to_strict_bools() {
    // values as they may arrive from prior serialization
    for (loose, strict) in [
        (json!(1), true),
        (json!(0), false),
        (json!("yes"), true),
        (json!(""), false),
        (json!(null), false),
    ] {
        let mut fields = FieldMap::new();
        fields.insert("isConsultant".into(), loose.clone());
        let record = Record::new(
            RecordId::from_string("doctor_000000003"),
            SectionKind::Doctor,
            fields,
        );
        let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
        assert_eq!(
            draft.get("isConsultant"),
            Some(&Value::Bool(strict)),
            "coercing {loose}"
        );
    }
}

#[test]
fn non_boolean_fields_are_not_coerced() {
    let record = doctor_record();
    let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    assert_eq!(draft.get("experience"), Some(&json!("15")));
}

#[test]
fn draft_never_aliases_the_record() {
    let record = doctor_record();
    let mut draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    draft
        .set("doctorName", FieldInput::Text("Dr. Someone Else".into()))
        .unwrap();
    draft
        .set(
            "departmentOptions",
            FieldInput::ToggleOption("Dental".into()),
        )
        .unwrap();

    assert_eq!(record.field_str("doctorName"), Some("Dr. Ayesha Rahman"));
    assert_eq!(record.field("departmentOptions"), Some(&json!(["Cardiology"])));
}

// ── Editing ──────────────────────────────────────────────────────

#[test]
fn set_routes_through_the_field_kind() {
    let mut draft = FormDraft::open(SectionKind::Service, None);
    draft.set("name", FieldInput::Text("MRI Scan".into())).unwrap();
    draft.set("isActive", FieldInput::Toggle(false)).unwrap();
    draft
        .set("primeOptions", FieldInput::ToggleOption("OT Comparison".into()))
        .unwrap();

    assert_eq!(draft.get("name"), Some(&json!("MRI Scan")));
    assert_eq!(draft.get("isActive"), Some(&json!(false)));
    assert_eq!(draft.get("primeOptions"), Some(&json!(["OT Comparison"])));
}

#[test]
fn set_rejects_undeclared_fields() {
    let mut draft = FormDraft::open(SectionKind::Service, None);
    let err = draft
        .set("favouriteColor", FieldInput::Text("red".into()))
        .unwrap_err();
    assert_eq!(
        err,
        FormError::UnknownField {
            field: "favouriteColor".into()
        }
    );
}

#[test]
fn render_follows_form_order() {
    let draft = FormDraft::open(SectionKind::Service, None);
    let names: Vec<_> = draft.render().iter().map(|w| w.name.clone()).collect();
    assert_eq!(names, vec!["name", "description", "primeOptions", "isActive"]);
}

// ── Submit ───────────────────────────────────────────────────────

#[test]
fn submit_lists_every_empty_required_field() {
    let mut draft = FormDraft::open(SectionKind::Service, None);
    draft.set("name", FieldInput::Text("MRI Scan".into())).unwrap();

    let err = draft.submit().unwrap_err();
    assert_eq!(
        err,
        FormError::Validation {
            fields: vec!["description".into()]
        }
    );
}

#[test]
fn submit_blank_create_reports_all_required_fields() {
    let draft = FormDraft::open(SectionKind::Department, None);
    let err = draft.submit().unwrap_err();
    assert_eq!(
        err,
        FormError::Validation {
            fields: vec!["departmentName".into(), "details".into()]
        }
    );
}

#[test]
fn false_checkboxes_pass_validation() {
    let mut draft = FormDraft::open(SectionKind::Department, None);
    draft
        .set("departmentName", FieldInput::Text("Dental".into()))
        .unwrap();
    draft.set("details", FieldInput::Text("Dental care".into())).unwrap();
    draft.set("isActive", FieldInput::Toggle(false)).unwrap();

    let fields = draft.submit().unwrap();
    assert_eq!(fields.get("isActive"), Some(&json!(false)));
}

#[test]
fn optional_fields_may_stay_empty() {
    let mut draft = FormDraft::open(SectionKind::User, None);
    for (field, value) in [
        ("user_name", "admin"),
        ("password", "hunter2"),
        ("address", "12 Lake Rd"),
        ("mobile_no", "01700000000"),
        ("email", "admin@example.com"),
        ("gender", "Female"),
        ("dob", "1990-04-12"),
        ("role", "manager"),
        ("user_type", "staff"),
    ] {
        draft.set(field, FieldInput::Text(value.into())).unwrap();
    }
    // permission left empty on purpose
    let fields = draft.submit().unwrap();
    assert_eq!(fields.get("permission"), Some(&json!("")));
}

#[test]
fn submit_returns_no_identifier() {
    let record = doctor_record();
    let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    let fields = draft.submit().unwrap();
    assert_eq!(fields.get("id"), None);
}

#[test]
fn submit_keeps_empty_multi_selects_explicit() {
    let mut draft = FormDraft::open(SectionKind::Service, None);
    draft.set("name", FieldInput::Text("MRI Scan".into())).unwrap();
    draft
        .set("description", FieldInput::Text("Imaging".into()))
        .unwrap();

    let fields = draft.submit().unwrap();
    assert_eq!(fields.get("primeOptions"), Some(&json!([])));
}

#[test]
fn submit_covers_every_declared_field() {
    let record = doctor_record();
    let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    let fields = draft.submit().unwrap();
    for spec in &SchemaRegistry::get(SectionKind::Doctor).fields {
        assert!(fields.contains_key(&spec.name), "missing {}", spec.name);
    }
}

#[test]
fn unchanged_edit_round_trips() {
    let record = doctor_record();
    let draft = FormDraft::open(SectionKind::Doctor, Some(&record));
    let fields = draft.submit().unwrap();
    assert_eq!(fields, record.fields);
}

#[test]
fn failed_submit_leaves_the_draft_editable() {
    let mut draft = FormDraft::open(SectionKind::Service, None);
    assert!(draft.submit().is_err());

    draft.set("name", FieldInput::Text("MRI Scan".into())).unwrap();
    draft
        .set("description", FieldInput::Text("Imaging".into()))
        .unwrap();
    assert!(draft.submit().is_ok());
}
