//! The fixed de-identification preset.
use crate::mutate::TagEdit;

/// Attribute values replaced by [`anonymize_edits`],
/// as compact tags and replacement values.
pub const ANONYMIZE_PRESET: &[(&str, &str)] = &[
    // Patient Name
    ("00100010", "ANONYMOUS^PATIENT"),
    // Patient ID
    ("00100020", "ANONYMOUS"),
    // Patient's Birth Date
    ("00100030", ""),
    // Patient's Sex
    ("00100040", "O"),
    // Study Description
    ("00081030", "ANONYMOUS STUDY"),
    // Operators' Name
    ("00081070", ""),
    // Manufacturer's Model Name
    ("00081090", ""),
    // Referring Physician's Name
    ("00080090", "ANONYMOUS^DOCTOR"),
];

/// The edits which replace identifying patient and study attributes.
///
/// Attributes absent from the data set are inserted,
/// so that every anonymized file carries the same values.
pub fn anonymize_edits() -> Vec<TagEdit> {
    ANONYMIZE_PRESET
        .iter()
        .map(|(tag, value)| TagEdit::new(*tag, *value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutate::TagMutator;
    use dcmedit_core::header::HasLength;
    use dcmedit_core::{DataElement, Length, VR};
    use dcmedit_dictionary_std::tags;
    use dcmedit_encoding::transfer_syntax::Endianness;
    use dcmedit_object::{FileDicomObject, FileMetaTableBuilder, InMemDataSet};

    #[test]
    fn preset_replaces_identifying_attributes() {
        let meta = FileMetaTableBuilder::new()
            .transfer_syntax("1.2.840.10008.1.2.1")
            .build()
            .unwrap();
        let mut obj = FileDicomObject::new(
            meta,
            InMemDataSet::from_element_iter([
                DataElement::new_primitive(tags::PATIENT_NAME, VR::PN, &b"DOE^JANE"[..]),
                DataElement::new_primitive(tags::PATIENT_BIRTH_DATE, VR::DA, &b"19700101"[..]),
                DataElement::new_primitive(tags::MODALITY, VR::CS, &b"MR"[..]),
            ]),
            Endianness::Little,
        );

        let report = TagMutator::new().apply(&mut obj, &anonymize_edits()).unwrap();
        assert_eq!(report.len(), ANONYMIZE_PRESET.len());

        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().bytes(),
            Some(&b"ANONYMOUS^PATIENT "[..])
        );
        assert_eq!(
            obj.element(tags::PATIENT_BIRTH_DATE).unwrap().length(),
            Length(0)
        );
        assert_eq!(obj.element(tags::PATIENT_SEX).unwrap().vr(), VR::CS);
        assert_eq!(
            obj.element(tags::REFERRING_PHYSICIAN_NAME).unwrap().bytes(),
            Some(&b"ANONYMOUS^DOCTOR"[..])
        );
        // untouched
        assert_eq!(
            obj.element(tags::MODALITY).unwrap().bytes(),
            Some(&b"MR"[..])
        );
    }
}
