//! Built-in document template catalog
//!
//! Templates are compiled in and immutable. Per-field display hints drive
//! the preview layout from the same field list the form is built from.

use once_cell::sync::Lazy;

/// Input widget kind for a template field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    Number,
    Date,
    LongText,
}

impl FieldKind {
    /// Whether fields of this kind span multiple lines
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::LongText)
    }

    /// Character filter matching native input typing for this kind
    pub fn accepts_char(self, c: char) -> bool {
        match self {
            FieldKind::Number => c.is_ascii_digit() || c == '.',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::ShortText | FieldKind::LongText => !c.is_control(),
        }
    }
}

/// Display hint for the preview pane.
///
/// Fields sharing a `row` number render side by side in one preview row;
/// rows render in ascending `row` order. `label` overrides the form label,
/// `prefix`/`suffix` decorate the value ("$1500", "12 months").
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewHint {
    pub row: u8,
    pub label: Option<&'static str>,
    pub prefix: Option<&'static str>,
    pub suffix: Option<&'static str>,
}

/// A single labeled input slot within a template
#[derive(Debug, Clone)]
pub struct DocumentField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub preview: PreviewHint,
}

impl DocumentField {
    fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            placeholder: None,
            required: true,
            preview: PreviewHint::default(),
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    fn row(mut self, row: u8) -> Self {
        self.preview.row = row;
        self
    }

    fn preview_label(mut self, label: &'static str) -> Self {
        self.preview.label = Some(label);
        self
    }

    fn prefix(mut self, prefix: &'static str) -> Self {
        self.preview.prefix = Some(prefix);
        self
    }

    fn suffix(mut self, suffix: &'static str) -> Self {
        self.preview.suffix = Some(suffix);
        self
    }

    /// Label shown in the preview pane
    pub fn display_label(&self) -> &'static str {
        self.preview.label.unwrap_or(self.label)
    }
}

/// A named legal-document type with fixed field definitions
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub fields: Vec<DocumentField>,
}

impl DocumentTemplate {
    /// Artifact file stem: title with whitespace runs replaced by hyphens
    pub fn file_stem(&self) -> String {
        self.title.split_whitespace().collect::<Vec<_>>().join("-")
    }

    /// Fields grouped into preview rows, in ascending row order.
    /// Within a row, fields keep their declared order.
    pub fn preview_rows(&self) -> Vec<Vec<&DocumentField>> {
        let mut row_numbers: Vec<u8> = self.fields.iter().map(|f| f.preview.row).collect();
        row_numbers.sort_unstable();
        row_numbers.dedup();

        row_numbers
            .into_iter()
            .map(|row| {
                self.fields
                    .iter()
                    .filter(|f| f.preview.row == row)
                    .collect()
            })
            .collect()
    }
}

static TEMPLATES: Lazy<Vec<DocumentTemplate>> = Lazy::new(|| {
    use FieldKind::{Date, LongText, Number, ShortText};

    vec![
        DocumentTemplate {
            id: "rental-agreement",
            title: "Rental Agreement",
            description: "Create a legally binding rental contract",
            icon: "🏠",
            category: "Real Estate",
            fields: vec![
                DocumentField::new("landlordName", "Landlord Name", ShortText)
                    .row(1)
                    .preview_label("Landlord"),
                DocumentField::new("tenantName", "Tenant Name", ShortText)
                    .row(1)
                    .preview_label("Tenant"),
                DocumentField::new("propertyAddress", "Property Address", ShortText).row(2),
                DocumentField::new("monthlyRent", "Monthly Rent ($)", Number)
                    .row(3)
                    .preview_label("Monthly Rent")
                    .prefix("$"),
                DocumentField::new("leaseTerm", "Lease Term (months)", Number)
                    .row(3)
                    .preview_label("Lease Term")
                    .suffix(" months"),
                DocumentField::new("startDate", "Start Date", Date)
                    .row(0)
                    .preview_label("This Agreement entered on"),
                DocumentField::new("securityDeposit", "Security Deposit ($)", Number)
                    .row(3)
                    .preview_label("Security Deposit")
                    .prefix("$"),
            ],
        },
        DocumentTemplate {
            id: "power-of-attorney",
            title: "Power of Attorney",
            description: "Authorize someone to act on your behalf",
            icon: "⚖️",
            category: "Legal Authority",
            fields: vec![
                DocumentField::new("principalName", "Your Name", ShortText)
                    .row(0)
                    .preview_label("Principal"),
                DocumentField::new("agentName", "Agent Name", ShortText)
                    .row(0)
                    .preview_label("Agent"),
                DocumentField::new("agentAddress", "Agent Address", ShortText).row(1),
                DocumentField::new("effectiveDate", "Effective Date", Date).row(2),
                DocumentField::new("expirationDate", "Expiration Date", Date)
                    .row(2)
                    .optional(),
                DocumentField::new("powers", "Powers Granted", LongText)
                    .row(3)
                    .placeholder("Describe the specific powers you are granting"),
            ],
        },
        DocumentTemplate {
            id: "complaint-letter",
            title: "Complaint Letter",
            description: "Formal complaint letter for grievances",
            icon: "📝",
            category: "Communication",
            fields: vec![
                DocumentField::new("senderName", "Your Name", ShortText)
                    .row(0)
                    .preview_label("From"),
                DocumentField::new("senderAddress", "Your Address", ShortText).row(1),
                DocumentField::new("recipientName", "Recipient Name", ShortText)
                    .row(0)
                    .preview_label("To"),
                DocumentField::new("recipientAddress", "Recipient Address", ShortText).row(1),
                DocumentField::new("subject", "Subject", ShortText).row(2),
                DocumentField::new("complaintDetails", "Details of Complaint", LongText)
                    .row(3)
                    .placeholder("Describe your complaint in detail"),
                DocumentField::new("desiredResolution", "Desired Resolution", LongText)
                    .row(4)
                    .placeholder("What would you like to happen?"),
            ],
        },
    ]
});

/// The full compiled-in catalog
pub fn templates() -> &'static [DocumentTemplate] {
    &TEMPLATES
}

/// Read-only lookup by id. `None` means "no template selected, show catalog".
pub fn find_template(id: &str) -> Option<&'static DocumentTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_has_three_templates() {
        assert_eq!(templates().len(), 3);
    }

    #[test]
    fn test_template_ids_are_unique() {
        let mut ids: Vec<_> = templates().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates().len());
    }

    #[test]
    fn test_field_ids_are_unique_within_template() {
        for template in templates() {
            let mut ids: Vec<_> = template.fields.iter().map(|f| f.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), template.fields.len(), "{}", template.id);
        }
    }

    #[test]
    fn test_find_template_by_id() {
        let template = find_template("rental-agreement").unwrap();
        assert_eq!(template.title, "Rental Agreement");
        assert_eq!(template.fields.len(), 7);
    }

    #[test]
    fn test_find_template_unknown_id_is_none() {
        assert!(find_template("prenup").is_none());
    }

    #[test]
    fn test_rental_agreement_field_order() {
        let template = find_template("rental-agreement").unwrap();
        let ids: Vec<_> = template.fields.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![
                "landlordName",
                "tenantName",
                "propertyAddress",
                "monthlyRent",
                "leaseTerm",
                "startDate",
                "securityDeposit",
            ]
        );
    }

    #[test]
    fn test_expiration_date_is_only_optional_field() {
        for template in templates() {
            for field in &template.fields {
                if field.id == "expirationDate" {
                    assert!(!field.required);
                } else {
                    assert!(field.required, "{} should be required", field.id);
                }
            }
        }
    }

    #[test]
    fn test_file_stem_replaces_spaces_with_hyphens() {
        let template = find_template("rental-agreement").unwrap();
        assert_eq!(template.file_stem(), "Rental-Agreement");
        let template = find_template("power-of-attorney").unwrap();
        assert_eq!(template.file_stem(), "Power-of-Attorney");
    }

    #[test]
    fn test_preview_rows_cover_every_field_once() {
        for template in templates() {
            let row_fields: usize = template.preview_rows().iter().map(|r| r.len()).sum();
            assert_eq!(row_fields, template.fields.len(), "{}", template.id);
        }
    }

    #[test]
    fn test_rental_preview_rows_grouping() {
        let template = find_template("rental-agreement").unwrap();
        let rows = template.preview_rows();
        let ids: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| row.iter().map(|f| f.id).collect())
            .collect();
        assert_eq!(
            ids,
            vec![
                vec!["startDate"],
                vec!["landlordName", "tenantName"],
                vec!["propertyAddress"],
                vec!["monthlyRent", "leaseTerm", "securityDeposit"],
            ]
        );
    }

    #[test]
    fn test_number_field_char_filter() {
        assert!(FieldKind::Number.accepts_char('7'));
        assert!(FieldKind::Number.accepts_char('.'));
        assert!(!FieldKind::Number.accepts_char('a'));
        assert!(!FieldKind::Number.accepts_char('-'));
    }

    #[test]
    fn test_date_field_char_filter() {
        assert!(FieldKind::Date.accepts_char('2'));
        assert!(FieldKind::Date.accepts_char('-'));
        assert!(!FieldKind::Date.accepts_char('/'));
    }

    #[test]
    fn test_display_label_falls_back_to_form_label() {
        let template = find_template("complaint-letter").unwrap();
        let sender = &template.fields[0];
        assert_eq!(sender.display_label(), "From");
        let subject = template.fields.iter().find(|f| f.id == "subject").unwrap();
        assert_eq!(subject.display_label(), "Subject");
    }
}
