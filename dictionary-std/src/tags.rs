//! Data element tag declarations
//!
//! This module contains a collection of constants
//! mapping attribute keywords to their DICOM tags,
//! plus the table of entries backing the
//! [standard data dictionary](crate::StandardDataDictionary).
//!
//! Constants for repeating groups or elements
//! (such as overlays, `60xx`) hold the tag with the open digits zeroed.

use dcmedit_core::dictionary::{DataDictionaryEntryRef, TagRange::*, VirtualVr::*, Vm};
use dcmedit_core::header::Tag;
use dcmedit_core::VR::*;

/// CommandGroupLength (0000,0000) UL 1
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// AffectedSOPClassUID (0000,0002) UI 1
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// CommandField (0000,0100) US 1
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// MessageID (0000,0110) US 1
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// Status (0000,0900) US 1
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE 1
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE 1
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// SourcePresentationAddress (0002,0026) UR 1
#[rustfmt::skip]
pub const SOURCE_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0026);
/// SendingPresentationAddress (0002,0027) UR 1
#[rustfmt::skip]
pub const SENDING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0027);
/// ReceivingPresentationAddress (0002,0028) UR 1
#[rustfmt::skip]
pub const RECEIVING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0028);
/// RTVMetaInformationVersion (0002,0031) OB 1
#[rustfmt::skip]
pub const RTV_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0031);
/// RTVCommunicationSOPClassUID (0002,0032) UI 1
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0032);
/// RTVCommunicationSOPInstanceUID (0002,0033) UI 1
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0033);
/// RTVSourceIdentifier (0002,0035) OB 1
#[rustfmt::skip]
pub const RTV_SOURCE_IDENTIFIER: Tag = Tag(0x0002, 0x0035);
/// RTVFlowIdentifier (0002,0036) OB 1
#[rustfmt::skip]
pub const RTV_FLOW_IDENTIFIER: Tag = Tag(0x0002, 0x0036);
/// RTVFlowRTPSamplingRate (0002,0037) UL 1
#[rustfmt::skip]
pub const RTV_FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0002, 0x0037);
/// RTVFlowActualFrameDuration (0002,0038) FD 1
#[rustfmt::skip]
pub const RTV_FLOW_ACTUAL_FRAME_DURATION: Tag = Tag(0x0002, 0x0038);
/// PrivateInformationCreatorUID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI 1
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// RelatedGeneralSOPClassUID (0008,001A) UI 1-n
#[rustfmt::skip]
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// QueryRetrieveLevel (0008,0052) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// RetrieveAETitle (0008,0054) AE 1-n
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// InstanceAvailability (0008,0056) CS 1
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// FailedSOPInstanceUIDList (0008,0058) UI 1-n
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS 1-n
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// ConversionType (0008,0064) CS 1
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// PresentationIntentType (0008,0068) CS 1
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST 1
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// InstitutionCodeSequence (0008,0082) SQ 1
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// ReferringPhysicianName (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianAddress (0008,0092) ST 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// ReferringPhysicianTelephoneNumbers (0008,0094) SH 1-n
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// ReferringPhysicianIdentificationSequence (0008,0096) SQ 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodingSchemeVersion (0008,0103) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// TimezoneOffsetFromUTC (0008,0201) SH 1
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName (0008,1010) SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO 1
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PhysiciansOfRecord (0008,1048) PN 1-n
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// PerformingPhysicianName (0008,1050) PN 1-n
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// NameOfPhysiciansReadingStudy (0008,1060) PN 1-n
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// OperatorsName (0008,1070) PN 1-n
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// AdmittingDiagnosesDescription (0008,1080) LO 1-n
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// ManufacturerModelName (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedPatientSequence (0008,1120) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedImageSequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedFrameNumber (0008,1160) IS 1-n
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// ReferencedSOPSequence (0008,1199) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// DerivationDescription (0008,2111) ST 1
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// PixelPresentation (0008,9205) CS 1
#[rustfmt::skip]
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// VolumetricProperties (0008,9206) CS 1
#[rustfmt::skip]
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);
/// VolumeBasedCalculationTechnique (0008,9207) CS 1
#[rustfmt::skip]
pub const VOLUME_BASED_CALCULATION_TECHNIQUE: Tag = Tag(0x0008, 0x9207);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientIDs (0010,1000) LO 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ 1
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientAge (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO 1
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// EthnicGroup (0010,2160) SH 1
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH 1
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// AdditionalPatientHistory (0010,21B0) LT 1
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0) US 1
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// PatientComments (0010,4000) LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ContrastBolusAgent (0018,0010) LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// BodyPartExamined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS 1-n
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SequenceVariant (0018,0021) CS 1-n
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// ScanOptions (0018,0022) CS 1-n
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MRAcquisitionType (0018,0023) CS 1
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// RepetitionTime (0018,0080) DS 1
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081) DS 1
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// InversionTime (0018,0082) DS 1
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// NumberOfAverages (0018,0083) DS 1
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// ImagingFrequency (0018,0084) DS 1
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// MagneticFieldStrength (0018,0087) DS 1
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088) DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// EchoTrainLength (0018,0091) IS 1
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// DeviceSerialNumber (0018,1000) LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// SpatialResolution (0018,1050) DS 1
#[rustfmt::skip]
pub const SPATIAL_RESOLUTION: Tag = Tag(0x0018, 0x1050);
/// HeartRate (0018,1088) IS 1
#[rustfmt::skip]
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// ReconstructionDiameter (0018,1100) DS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// DistanceSourceToDetector (0018,1110) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// DistanceSourceToPatient (0018,1111) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// GantryDetectorTilt (0018,1120) DS 1
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// TableHeight (0018,1130) DS 1
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// ExposureTime (0018,1150) IS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS 1
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// FilterType (0018,1160) SH 1
#[rustfmt::skip]
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// ImagerPixelSpacing (0018,1164) DS 2
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// FocalSpots (0018,1190) DS 1-n
#[rustfmt::skip]
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// ConvolutionKernel (0018,1210) SH 1-n
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// ReceiveCoilName (0018,1250) SH 1
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// AcquisitionMatrix (0018,1310) US 4
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// FlipAngle (0018,1314) DS 1
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// PatientPosition (0018,5100) CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ViewPosition (0018,5101) CS 1
#[rustfmt::skip]
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS 1
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS 1
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// ImageLaterality (0020,0062) CS 1
#[rustfmt::skip]
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// TemporalPositionIdentifier (0020,0100) IS 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// NumberOfTemporalPositions (0020,0105) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// ImagesInAcquisition (0020,1002) IS 1
#[rustfmt::skip]
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// PositionReferenceIndicator (0020,1040) LO 1
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// SourceImageIDs (0020,31xx) CS 1-n
#[rustfmt::skip]
pub const SOURCE_IMAGE_IDS: Tag = Tag(0x0020, 0x3100);
/// ImageComments (0020,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS 2
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US or SS 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue (0028,0120) US or SS 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// BurnedInAnnotation (0028,0301) CS 1
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// PixelIntensityRelationship (0028,1040) CS 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// WindowCenterWidthExplanation (0028,1055) LO 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US or SS 3
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) US or SS 3
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) US or SS 3
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// RedPaletteColorLookupTableData (0028,1201) OW 1
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW 1
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW 1
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// LossyImageCompression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LossyImageCompressionMethod (0028,2114) CS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// ModalityLUTSequence (0028,3000) SQ 1
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUTDescriptor (0028,3002) US or SS 3
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTExplanation (0028,3003) LO 1
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// LUTData (0028,3006) US or OW 1-n
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ 1
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// RequestingPhysician (0032,1032) PN 1
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestedProcedureDescription (0032,1060) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// PerformedProcedureStepStartDate (0040,0244) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253) SH 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProtocolCodeSequence (0040,0260) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// RequestAttributesSequence (0040,0275) SQ 1
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// RequestedProcedureID (0040,1001) SH 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// ConceptNameCodeSequence (0040,A043) SQ 1
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// UID (0040,A124) UI 1
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// ConceptCodeSequence (0040,A168) SQ 1
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// ContentSequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// StorageMediaFileSetUID (0088,0140) UI 1
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// OverlayRows (60xx,0010) US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType (60xx,0040) CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (60xx,0050) SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (60xx,0100) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (60xx,3000) OB or OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// ExtendedOffsetTable (7FE0,0001) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// FloatPixelData (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OB or OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(MESSAGE_ID), alias: "MessageID", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(STATUS), alias: "Status", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: Exact(AE), vm: Vm::ONE },
    E { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", vr: Exact(AE), vm: Vm::ONE },
    E { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", vr: Exact(AE), vm: Vm::ONE },
    E { tag: Single(SOURCE_PRESENTATION_ADDRESS), alias: "SourcePresentationAddress", vr: Exact(UR), vm: Vm::ONE },
    E { tag: Single(SENDING_PRESENTATION_ADDRESS), alias: "SendingPresentationAddress", vr: Exact(UR), vm: Vm::ONE },
    E { tag: Single(RECEIVING_PRESENTATION_ADDRESS), alias: "ReceivingPresentationAddress", vr: Exact(UR), vm: Vm::ONE },
    E { tag: Single(RTV_META_INFORMATION_VERSION), alias: "RTVMetaInformationVersion", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(RTV_COMMUNICATION_SOP_CLASS_UID), alias: "RTVCommunicationSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(RTV_COMMUNICATION_SOP_INSTANCE_UID), alias: "RTVCommunicationSOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(RTV_SOURCE_IDENTIFIER), alias: "RTVSourceIdentifier", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(RTV_FLOW_IDENTIFIER), alias: "RTVFlowIdentifier", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(RTV_FLOW_RTP_SAMPLING_RATE), alias: "RTVFlowRTPSamplingRate", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(RTV_FLOW_ACTUAL_FRAME_DURATION), alias: "RTVFlowActualFrameDuration", vr: Exact(FD), vm: Vm::ONE },
    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: Exact(CS), vm: Vm { min: 2, max: None, step: 1 } },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(INSTANCE_CREATOR_UID), alias: "InstanceCreatorUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(RELATED_GENERAL_SOP_CLASS_UID), alias: "RelatedGeneralSOPClassUID", vr: Exact(UI), vm: Vm::ONE_OR_MORE },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: Exact(DT), vm: Vm::ONE },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(QUERY_RETRIEVE_LEVEL), alias: "QueryRetrieveLevel", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(RETRIEVE_AE_TITLE), alias: "RetrieveAETitle", vr: Exact(AE), vm: Vm::ONE_OR_MORE },
    E { tag: Single(INSTANCE_AVAILABILITY), alias: "InstanceAvailability", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(FAILED_SOP_INSTANCE_UID_LIST), alias: "FailedSOPInstanceUIDList", vr: Exact(UI), vm: Vm::ONE_OR_MORE },
    E { tag: Single(MODALITY), alias: "Modality", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(MODALITIES_IN_STUDY), alias: "ModalitiesInStudy", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(PRESENTATION_INTENT_TYPE), alias: "PresentationIntentType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", vr: Exact(ST), vm: Vm::ONE },
    E { tag: Single(INSTITUTION_CODE_SEQUENCE), alias: "InstitutionCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(PN), vm: Vm::ONE },
    E { tag: Single(REFERRING_PHYSICIAN_ADDRESS), alias: "ReferringPhysicianAddress", vr: Exact(ST), vm: Vm::ONE },
    E { tag: Single(REFERRING_PHYSICIAN_TELEPHONE_NUMBERS), alias: "ReferringPhysicianTelephoneNumbers", vr: Exact(SH), vm: Vm::ONE_OR_MORE },
    E { tag: Single(REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "ReferringPhysicianIdentificationSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(CODING_SCHEME_VERSION), alias: "CodingSchemeVersion", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(STATION_NAME), alias: "StationName", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PROCEDURE_CODE_SEQUENCE), alias: "ProcedureCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_NAME), alias: "InstitutionalDepartmentName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PHYSICIANS_OF_RECORD), alias: "PhysiciansOfRecord", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(NAME_OF_PHYSICIANS_READING_STUDY), alias: "NameOfPhysiciansReadingStudy", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(ADMITTING_DIAGNOSES_DESCRIPTION), alias: "AdmittingDiagnosesDescription", vr: Exact(LO), vm: Vm::ONE_OR_MORE },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), alias: "ReferencedPerformedProcedureStepSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_PATIENT_SEQUENCE), alias: "ReferencedPatientSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(REFERENCED_FRAME_NUMBER), alias: "ReferencedFrameNumber", vr: Exact(IS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(REFERENCED_SOP_SEQUENCE), alias: "ReferencedSOPSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", vr: Exact(ST), vm: Vm::ONE },
    E { tag: Single(SOURCE_IMAGE_SEQUENCE), alias: "SourceImageSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PIXEL_PRESENTATION), alias: "PixelPresentation", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(VOLUMETRIC_PROPERTIES), alias: "VolumetricProperties", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(VOLUME_BASED_CALCULATION_TECHNIQUE), alias: "VolumeBasedCalculationTechnique", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(PN), vm: Vm::ONE },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(OTHER_PATIENT_IDS), alias: "OtherPatientIDs", vr: Exact(LO), vm: Vm::ONE_OR_MORE },
    E { tag: Single(OTHER_PATIENT_NAMES), alias: "OtherPatientNames", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(OTHER_PATIENT_IDS_SEQUENCE), alias: "OtherPatientIDsSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(AS), vm: Vm::ONE },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(PATIENT_ADDRESS), alias: "PatientAddress", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(ETHNIC_GROUP), alias: "EthnicGroup", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(OCCUPATION), alias: "Occupation", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(ADDITIONAL_PATIENT_HISTORY), alias: "AdditionalPatientHistory", vr: Exact(LT), vm: Vm::ONE },
    E { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: Exact(LT), vm: Vm::ONE },
    E { tag: Single(CONTRAST_BOLUS_AGENT), alias: "ContrastBolusAgent", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(SCANNING_SEQUENCE), alias: "ScanningSequence", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(SEQUENCE_VARIANT), alias: "SequenceVariant", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(SCAN_OPTIONS), alias: "ScanOptions", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(MR_ACQUISITION_TYPE), alias: "MRAcquisitionType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(KVP), alias: "KVP", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(REPETITION_TIME), alias: "RepetitionTime", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(ECHO_TIME), alias: "EchoTime", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(INVERSION_TIME), alias: "InversionTime", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(NUMBER_OF_AVERAGES), alias: "NumberOfAverages", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(IMAGING_FREQUENCY), alias: "ImagingFrequency", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(MAGNETIC_FIELD_STRENGTH), alias: "MagneticFieldStrength", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(ECHO_TRAIN_LENGTH), alias: "EchoTrainLength", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: Exact(LO), vm: Vm::ONE_OR_MORE },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(SPATIAL_RESOLUTION), alias: "SpatialResolution", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(HEART_RATE), alias: "HeartRate", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(RECONSTRUCTION_DIAMETER), alias: "ReconstructionDiameter", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(DISTANCE_SOURCE_TO_DETECTOR), alias: "DistanceSourceToDetector", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(DISTANCE_SOURCE_TO_PATIENT), alias: "DistanceSourceToPatient", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(GANTRY_DETECTOR_TILT), alias: "GantryDetectorTilt", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(TABLE_HEIGHT), alias: "TableHeight", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(EXPOSURE), alias: "Exposure", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(FILTER_TYPE), alias: "FilterType", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(IMAGER_PIXEL_SPACING), alias: "ImagerPixelSpacing", vr: Exact(DS), vm: Vm::exactly(2) },
    E { tag: Single(FOCAL_SPOTS), alias: "FocalSpots", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(CONVOLUTION_KERNEL), alias: "ConvolutionKernel", vr: Exact(SH), vm: Vm::ONE_OR_MORE },
    E { tag: Single(RECEIVE_COIL_NAME), alias: "ReceiveCoilName", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_MATRIX), alias: "AcquisitionMatrix", vr: Exact(US), vm: Vm::exactly(4) },
    E { tag: Single(FLIP_ANGLE), alias: "FlipAngle", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(VIEW_POSITION), alias: "ViewPosition", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: Exact(CS), vm: Vm::exactly(2) },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: Exact(DS), vm: Vm::exactly(3) },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: Exact(DS), vm: Vm::exactly(6) },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(IMAGE_LATERALITY), alias: "ImageLaterality", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(TEMPORAL_POSITION_IDENTIFIER), alias: "TemporalPositionIdentifier", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(NUMBER_OF_TEMPORAL_POSITIONS), alias: "NumberOfTemporalPositions", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(IMAGES_IN_ACQUISITION), alias: "ImagesInAcquisition", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(POSITION_REFERENCE_INDICATOR), alias: "PositionReferenceIndicator", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Element100(SOURCE_IMAGE_IDS), alias: "SourceImageIDs", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: Exact(LT), vm: Vm::ONE },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: Exact(AT), vm: Vm::ONE_OR_MORE },
    E { tag: Single(ROWS), alias: "Rows", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(COLUMNS), alias: "Columns", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: Exact(DS), vm: Vm::exactly(2) },
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: Exact(IS), vm: Vm::exactly(2) },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs, vm: Vm::ONE },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs, vm: Vm::ONE },
    E { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", vr: Xs, vm: Vm::ONE },
    E { tag: Single(BURNED_IN_ANNOTATION), alias: "BurnedInAnnotation", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(PIXEL_INTENSITY_RELATIONSHIP), alias: "PixelIntensityRelationship", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(WINDOW_CENTER_WIDTH_EXPLANATION), alias: "WindowCenterWidthExplanation", vr: Exact(LO), vm: Vm::ONE_OR_MORE },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: Xs, vm: Vm::exactly(3) },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "GreenPaletteColorLookupTableDescriptor", vr: Xs, vm: Vm::exactly(3) },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "BluePaletteColorLookupTableDescriptor", vr: Xs, vm: Vm::exactly(3) },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: Exact(OW), vm: Vm::ONE },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "GreenPaletteColorLookupTableData", vr: Exact(OW), vm: Vm::ONE },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "BluePaletteColorLookupTableData", vr: Exact(OW), vm: Vm::ONE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_METHOD), alias: "LossyImageCompressionMethod", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(MODALITY_LUT_SEQUENCE), alias: "ModalityLUTSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(LUT_DESCRIPTOR), alias: "LUTDescriptor", vr: Xs, vm: Vm::exactly(3) },
    E { tag: Single(LUT_EXPLANATION), alias: "LUTExplanation", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(LUT_DATA), alias: "LUTData", vr: Lt, vm: Vm::ONE_OR_MORE },
    E { tag: Single(VOILUT_SEQUENCE), alias: "VOILUTSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REQUESTING_PHYSICIAN), alias: "RequestingPhysician", vr: Exact(PN), vm: Vm::ONE },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(REQUESTED_PROCEDURE_CODE_SEQUENCE), alias: "RequestedProcedureCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_ID), alias: "PerformedProcedureStepID", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROTOCOL_CODE_SEQUENCE), alias: "PerformedProtocolCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REQUESTED_PROCEDURE_ID), alias: "RequestedProcedureID", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(CONCEPT_NAME_CODE_SEQUENCE), alias: "ConceptNameCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(UID), alias: "UID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(CONCEPT_CODE_SEQUENCE), alias: "ConceptCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(STORAGE_MEDIA_FILE_SET_UID), alias: "StorageMediaFileSetUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: Exact(US), vm: Vm::ONE },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: Exact(US), vm: Vm::ONE },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: Exact(SS), vm: Vm::exactly(2) },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: Exact(US), vm: Vm::ONE },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: Exact(US), vm: Vm::ONE },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: Ox, vm: Vm::ONE },
    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: Exact(OV), vm: Vm::ONE },
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: Exact(OV), vm: Vm::ONE },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: Exact(OF), vm: Vm::ONE },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: Exact(OD), vm: Vm::ONE },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px, vm: Vm::ONE },
    E { tag: Single(DIGITAL_SIGNATURES_SEQUENCE), alias: "DigitalSignaturesSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(DATA_SET_TRAILING_PADDING), alias: "DataSetTrailingPadding", vr: Exact(OB), vm: Vm::ONE },
];
