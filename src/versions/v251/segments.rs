//! Segment tables for HL7 v2.5.1

use crate::core::temporal::TimeFormat;
use crate::registry::{FieldDef, SegmentDef};

use super::datatypes as dt;

/// Look up a segment by identifier.
pub fn lookup(id: &str) -> Option<&'static SegmentDef> {
    match id {
        "AIG" => Some(&AIG),
        "AIL" => Some(&AIL),
        "AIP" => Some(&AIP),
        "AIS" => Some(&AIS),
        "BHS" => Some(&BHS),
        "BTS" => Some(&BTS),
        "CTD" => Some(&CTD),
        "CTI" => Some(&CTI),
        "DG1" => Some(&DG1),
        "DSC" => Some(&DSC),
        "ERR" => Some(&ERR),
        "FHS" => Some(&FHS),
        "FT1" => Some(&FT1),
        "FTS" => Some(&FTS),
        "MSA" => Some(&MSA),
        "MSH" => Some(&MSH),
        "NK1" => Some(&NK1),
        "NTE" => Some(&NTE),
        "OBR" => Some(&OBR),
        "OBX" => Some(&OBX),
        "ORC" => Some(&ORC),
        "PD1" => Some(&PD1),
        "PID" => Some(&PID),
        "PV1" => Some(&PV1),
        "PV2" => Some(&PV2),
        "RGS" => Some(&RGS),
        "SAC" => Some(&SAC),
        "SCH" => Some(&SCH),
        "SFT" => Some(&SFT),
        "SPM" => Some(&SPM),
        "TQ1" => Some(&TQ1),
        "TQ2" => Some(&TQ2),
        _ => None,
    }
}

/// Look up a batch/file control segment by identifier.
pub fn lookup_control(id: &str) -> Option<&'static SegmentDef> {
    match id {
        "BHS" => Some(&BHS),
        "BTS" => Some(&BTS),
        "DSC" => Some(&DSC),
        "FHS" => Some(&FHS),
        "FTS" => Some(&FTS),
        "SFT" => Some(&SFT),
        _ => None,
    }
}

pub static MSH: SegmentDef = SegmentDef {
    id: "MSH",
    name: "Message Header",
    size: 21,
    fields: &[
        FieldDef::text(1, "FieldSeparator").separator_marker(),
        FieldDef::text(2, "EncodingCharacters").encoding_marker(),
        FieldDef::composite(3, "SendingApplication", &dt::HD),
        FieldDef::composite(4, "SendingFacility", &dt::HD),
        FieldDef::composite(5, "ReceivingApplication", &dt::HD),
        FieldDef::composite(6, "ReceivingFacility", &dt::HD),
        FieldDef::timestamp(7, "DateTimeOfMessage", TimeFormat::YmdHms),
        FieldDef::text(8, "Security"),
        FieldDef::composite(9, "MessageType", &dt::MSG),
        FieldDef::text(10, "MessageControlID"),
        FieldDef::composite(11, "ProcessingID", &dt::PT),
        FieldDef::composite(12, "VersionID", &dt::VID),
        FieldDef::text(13, "SequenceNumber"),
        FieldDef::text(14, "ContinuationPointer"),
        FieldDef::text(15, "AcceptAcknowledgmentType"),
        FieldDef::text(16, "ApplicationAcknowledgmentType"),
        FieldDef::text(17, "CountryCode"),
        FieldDef::text(18, "CharacterSet").repeated(),
        FieldDef::composite(19, "PrincipalLanguageOfMessage", &dt::CE),
        FieldDef::text(20, "AlternateCharacterSetHandlingScheme"),
        FieldDef::composite(21, "MessageProfileIdentifier", &dt::EI).repeated(),
    ],
    message_type: Some(9),
    varies_by: None,
};

pub static MSA: SegmentDef = SegmentDef {
    id: "MSA",
    name: "Message Acknowledgment",
    size: 6,
    fields: &[
        FieldDef::text(1, "AcknowledgmentCode"),
        FieldDef::text(2, "MessageControlID"),
        FieldDef::text(3, "TextMessage"),
        FieldDef::text(4, "ExpectedSequenceNumber"),
        FieldDef::composite(6, "ErrorCondition", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static ERR: SegmentDef = SegmentDef {
    id: "ERR",
    name: "Error",
    size: 12,
    fields: &[
        FieldDef::composite(1, "ErrorCodeAndLocation", &dt::ELD).repeated(),
        FieldDef::composite(2, "ErrorLocation", &dt::ERL).repeated(),
        FieldDef::composite(3, "HL7ErrorCode", &dt::CWE),
        FieldDef::text(4, "Severity"),
        FieldDef::composite(5, "ApplicationErrorCode", &dt::CWE),
        FieldDef::text(6, "ApplicationErrorParameter").repeated(),
        FieldDef::text(7, "DiagnosticInformation"),
        FieldDef::text(8, "UserMessage"),
        FieldDef::text(9, "InformPersonIndicator").repeated(),
        FieldDef::composite(10, "OverrideType", &dt::CWE),
        FieldDef::composite(11, "OverrideReasonCode", &dt::CWE).repeated(),
        FieldDef::composite(12, "HelpDeskContactPoint", &dt::XTN).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static SFT: SegmentDef = SegmentDef {
    id: "SFT",
    name: "Software Segment",
    size: 6,
    fields: &[
        FieldDef::composite(1, "SoftwareVendorOrganization", &dt::XON),
        FieldDef::text(2, "SoftwareCertifiedVersionOrReleaseNumber"),
        FieldDef::text(3, "SoftwareProductName"),
        FieldDef::text(4, "SoftwareBinaryID"),
        FieldDef::text(5, "SoftwareProductInformation"),
        FieldDef::timestamp(6, "SoftwareInstallDate", TimeFormat::YmdHms),
    ],
    message_type: None,
    varies_by: None,
};

pub static NTE: SegmentDef = SegmentDef {
    id: "NTE",
    name: "Notes and Comments",
    size: 4,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SourceOfComment"),
        FieldDef::text(3, "Comment").repeated(),
        FieldDef::composite(4, "CommentType", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static PID: SegmentDef = SegmentDef {
    id: "PID",
    name: "Patient Identification",
    size: 39,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::composite(2, "PatientID", &dt::CX),
        FieldDef::composite(3, "PatientIdentifierList", &dt::CX).repeated(),
        FieldDef::composite(4, "AlternatePatientID", &dt::CX).repeated(),
        FieldDef::composite(5, "PatientName", &dt::XPN).repeated(),
        FieldDef::composite(6, "MothersMaidenName", &dt::XPN).repeated(),
        FieldDef::timestamp(7, "DateTimeOfBirth", TimeFormat::YmdHms),
        FieldDef::text(8, "AdministrativeSex"),
        FieldDef::composite(9, "PatientAlias", &dt::XPN).repeated(),
        FieldDef::composite(10, "Race", &dt::CE).repeated(),
        FieldDef::composite(11, "PatientAddress", &dt::XAD).repeated(),
        FieldDef::text(12, "CountyCode"),
        FieldDef::composite(13, "PhoneNumberHome", &dt::XTN).repeated(),
        FieldDef::composite(14, "PhoneNumberBusiness", &dt::XTN).repeated(),
        FieldDef::composite(15, "PrimaryLanguage", &dt::CE),
        FieldDef::composite(16, "MaritalStatus", &dt::CE),
        FieldDef::composite(17, "Religion", &dt::CE),
        FieldDef::composite(18, "PatientAccountNumber", &dt::CX),
        FieldDef::text(19, "SSNNumberPatient"),
        FieldDef::composite(20, "DriversLicenseNumberPatient", &dt::DLN),
        FieldDef::composite(21, "MothersIdentifier", &dt::CX).repeated(),
        FieldDef::composite(22, "EthnicGroup", &dt::CE).repeated(),
        FieldDef::text(23, "BirthPlace"),
        FieldDef::text(24, "MultipleBirthIndicator"),
        FieldDef::text(25, "BirthOrder"),
        FieldDef::composite(26, "Citizenship", &dt::CE).repeated(),
        FieldDef::composite(27, "VeteransMilitaryStatus", &dt::CE),
        FieldDef::composite(28, "NationalityCode", &dt::CE),
        FieldDef::timestamp(29, "PatientDeathDateAndTime", TimeFormat::YmdHms),
        FieldDef::text(30, "PatientDeathIndicator"),
        FieldDef::text(31, "IdentityUnknownIndicator"),
        FieldDef::text(32, "IdentityReliabilityCode").repeated(),
        FieldDef::timestamp(33, "LastUpdateDateTime", TimeFormat::YmdHms),
        FieldDef::composite(34, "LastUpdateFacility", &dt::HD),
        FieldDef::composite(35, "SpeciesCode", &dt::CE),
        FieldDef::composite(36, "BreedCode", &dt::CE),
        FieldDef::text(37, "Strain"),
        FieldDef::composite(38, "ProductionClassCode", &dt::CE),
        FieldDef::composite(39, "TribalCitizenship", &dt::CWE).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static PD1: SegmentDef = SegmentDef {
    id: "PD1",
    name: "Patient Additional Demographic",
    size: 21,
    fields: &[
        FieldDef::text(1, "LivingDependency").repeated(),
        FieldDef::text(2, "LivingArrangement"),
        FieldDef::composite(3, "PatientPrimaryFacility", &dt::XON).repeated(),
        FieldDef::composite(4, "PatientPrimaryCareProviderNameAndIDNo", &dt::XCN).repeated(),
        FieldDef::text(5, "StudentIndicator"),
        FieldDef::text(6, "Handicap"),
        FieldDef::text(7, "LivingWillCode"),
        FieldDef::text(8, "OrganDonorCode"),
        FieldDef::text(9, "SeparateBill"),
        FieldDef::composite(10, "DuplicatePatient", &dt::CX).repeated(),
        FieldDef::composite(11, "PublicityCode", &dt::CE),
        FieldDef::text(12, "ProtectionIndicator"),
        FieldDef::timestamp(13, "ProtectionIndicatorEffectiveDate", TimeFormat::Ymd),
        FieldDef::composite(14, "PlaceOfWorship", &dt::XON).repeated(),
        FieldDef::composite(15, "AdvanceDirectiveCode", &dt::CE).repeated(),
        FieldDef::text(16, "ImmunizationRegistryStatus"),
        FieldDef::timestamp(17, "ImmunizationRegistryStatusEffectiveDate", TimeFormat::Ymd),
        FieldDef::timestamp(18, "PublicityCodeEffectiveDate", TimeFormat::Ymd),
        FieldDef::text(19, "MilitaryBranch"),
        FieldDef::text(20, "MilitaryRankGrade"),
        FieldDef::text(21, "MilitaryStatus"),
    ],
    message_type: None,
    varies_by: None,
};

pub static NK1: SegmentDef = SegmentDef {
    id: "NK1",
    name: "Next of Kin / Associated Parties",
    size: 39,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::composite(2, "Name", &dt::XPN).repeated(),
        FieldDef::composite(3, "Relationship", &dt::CE),
        FieldDef::composite(4, "Address", &dt::XAD).repeated(),
        FieldDef::composite(5, "PhoneNumber", &dt::XTN).repeated(),
        FieldDef::composite(6, "BusinessPhoneNumber", &dt::XTN).repeated(),
        FieldDef::composite(7, "ContactRole", &dt::CE),
        FieldDef::timestamp(8, "StartDate", TimeFormat::Ymd),
        FieldDef::timestamp(9, "EndDate", TimeFormat::Ymd),
        FieldDef::text(10, "NextOfKinAssociatedPartiesJobTitle"),
        FieldDef::composite(11, "NextOfKinAssociatedPartiesJobCodeClass", &dt::JCC),
        FieldDef::composite(12, "NextOfKinAssociatedPartiesEmployeeNumber", &dt::CX),
        FieldDef::composite(13, "OrganizationNameNK1", &dt::XON).repeated(),
        FieldDef::composite(14, "MaritalStatus", &dt::CE),
        FieldDef::text(15, "AdministrativeSex"),
        FieldDef::timestamp(16, "DateTimeOfBirth", TimeFormat::YmdHms),
        FieldDef::text(17, "LivingDependency").repeated(),
        FieldDef::text(18, "AmbulatoryStatus").repeated(),
        FieldDef::composite(19, "Citizenship", &dt::CE).repeated(),
        FieldDef::composite(20, "PrimaryLanguage", &dt::CE),
        FieldDef::text(21, "LivingArrangement"),
        FieldDef::composite(22, "PublicityCode", &dt::CE),
        FieldDef::text(23, "ProtectionIndicator"),
        FieldDef::text(24, "StudentIndicator"),
        FieldDef::composite(25, "Religion", &dt::CE),
        FieldDef::composite(26, "MothersMaidenName", &dt::XPN).repeated(),
        FieldDef::composite(27, "Nationality", &dt::CE),
        FieldDef::composite(28, "EthnicGroup", &dt::CE).repeated(),
        FieldDef::composite(29, "ContactReason", &dt::CE).repeated(),
        FieldDef::composite(30, "ContactPersonsName", &dt::XPN).repeated(),
        FieldDef::composite(31, "ContactPersonsTelephoneNumber", &dt::XTN).repeated(),
        FieldDef::composite(32, "ContactPersonsAddress", &dt::XAD).repeated(),
        FieldDef::composite(33, "NextOfKinAssociatedPartysIdentifiers", &dt::CX).repeated(),
        FieldDef::text(34, "JobStatus"),
        FieldDef::composite(35, "Race", &dt::CE).repeated(),
        FieldDef::text(36, "Handicap"),
        FieldDef::text(37, "ContactPersonSocialSecurityNumber"),
        FieldDef::text(38, "NextOfKinBirthPlace"),
        FieldDef::text(39, "VIPIndicator"),
    ],
    message_type: None,
    varies_by: None,
};

pub static PV1: SegmentDef = SegmentDef {
    id: "PV1",
    name: "Patient Visit",
    size: 52,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "PatientClass"),
        FieldDef::composite(3, "AssignedPatientLocation", &dt::PL),
        FieldDef::text(4, "AdmissionType"),
        FieldDef::composite(5, "PreadmitNumber", &dt::CX),
        FieldDef::composite(6, "PriorPatientLocation", &dt::PL),
        FieldDef::composite(7, "AttendingDoctor", &dt::XCN).repeated(),
        FieldDef::composite(8, "ReferringDoctor", &dt::XCN).repeated(),
        FieldDef::composite(9, "ConsultingDoctor", &dt::XCN).repeated(),
        FieldDef::text(10, "HospitalService"),
        FieldDef::composite(11, "TemporaryLocation", &dt::PL),
        FieldDef::text(12, "PreadmitTestIndicator"),
        FieldDef::text(13, "ReAdmissionIndicator"),
        FieldDef::text(14, "AdmitSource"),
        FieldDef::text(15, "AmbulatoryStatus").repeated(),
        FieldDef::text(16, "VIPIndicator"),
        FieldDef::composite(17, "AdmittingDoctor", &dt::XCN).repeated(),
        FieldDef::text(18, "PatientType"),
        FieldDef::composite(19, "VisitNumber", &dt::CX),
        FieldDef::composite(20, "FinancialClass", &dt::FC).repeated(),
        FieldDef::text(21, "ChargePriceIndicator"),
        FieldDef::text(22, "CourtesyCode"),
        FieldDef::text(23, "CreditRating"),
        FieldDef::text(24, "ContractCode").repeated(),
        FieldDef::timestamp(25, "ContractEffectiveDate", TimeFormat::Ymd).repeated(),
        FieldDef::text(26, "ContractAmount").repeated(),
        FieldDef::text(27, "ContractPeriod").repeated(),
        FieldDef::text(28, "InterestCode"),
        FieldDef::text(29, "TransferToBadDebtCode"),
        FieldDef::timestamp(30, "TransferToBadDebtDate", TimeFormat::Ymd),
        FieldDef::text(31, "BadDebtAgencyCode"),
        FieldDef::text(32, "BadDebtTransferAmount"),
        FieldDef::text(33, "BadDebtRecoveryAmount"),
        FieldDef::text(34, "DeleteAccountIndicator"),
        FieldDef::timestamp(35, "DeleteAccountDate", TimeFormat::Ymd),
        FieldDef::text(36, "DischargeDisposition"),
        FieldDef::composite(37, "DischargedToLocation", &dt::DLD),
        FieldDef::composite(38, "DietType", &dt::CE),
        FieldDef::text(39, "ServicingFacility"),
        FieldDef::text(40, "BedStatus"),
        FieldDef::text(41, "AccountStatus"),
        FieldDef::composite(42, "PendingLocation", &dt::PL),
        FieldDef::composite(43, "PriorTemporaryLocation", &dt::PL),
        FieldDef::timestamp(44, "AdmitDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(45, "DischargeDateTime", TimeFormat::YmdHms).repeated(),
        FieldDef::text(46, "CurrentPatientBalance"),
        FieldDef::text(47, "TotalCharges"),
        FieldDef::text(48, "TotalAdjustments"),
        FieldDef::text(49, "TotalPayments"),
        FieldDef::composite(50, "AlternateVisitID", &dt::CX),
        FieldDef::text(51, "VisitIndicator"),
        FieldDef::composite(52, "OtherHealthcareProvider", &dt::XCN).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static PV2: SegmentDef = SegmentDef {
    id: "PV2",
    name: "Patient Visit - Additional Information",
    size: 49,
    fields: &[
        FieldDef::composite(1, "PriorPendingLocation", &dt::PL),
        FieldDef::composite(2, "AccommodationCode", &dt::CE),
        FieldDef::composite(3, "AdmitReason", &dt::CE),
        FieldDef::composite(4, "TransferReason", &dt::CE),
        FieldDef::text(5, "PatientValuables").repeated(),
        FieldDef::text(6, "PatientValuablesLocation"),
        FieldDef::text(7, "VisitUserCode").repeated(),
        FieldDef::timestamp(8, "ExpectedAdmitDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(9, "ExpectedDischargeDateTime", TimeFormat::YmdHms),
        FieldDef::text(10, "EstimatedLengthOfInpatientStay"),
        FieldDef::text(11, "ActualLengthOfInpatientStay"),
        FieldDef::text(12, "VisitDescription"),
        FieldDef::composite(13, "ReferralSourceCode", &dt::XCN).repeated(),
        FieldDef::timestamp(14, "PreviousServiceDate", TimeFormat::Ymd),
        FieldDef::text(15, "EmploymentIllnessRelatedIndicator"),
        FieldDef::text(16, "PurgeStatusCode"),
        FieldDef::timestamp(17, "PurgeStatusDate", TimeFormat::Ymd),
        FieldDef::text(18, "SpecialProgramCode"),
        FieldDef::text(19, "RetentionIndicator"),
        FieldDef::text(20, "ExpectedNumberOfInsurancePlans"),
        FieldDef::text(21, "VisitPublicityCode"),
        FieldDef::text(22, "VisitProtectionIndicator"),
        FieldDef::composite(23, "ClinicOrganizationName", &dt::XON).repeated(),
        FieldDef::text(24, "PatientStatusCode"),
        FieldDef::text(25, "VisitPriorityCode"),
        FieldDef::timestamp(26, "PreviousTreatmentDate", TimeFormat::Ymd),
        FieldDef::text(27, "ExpectedDischargeDisposition"),
        FieldDef::timestamp(28, "SignatureOnFileDate", TimeFormat::Ymd),
        FieldDef::timestamp(29, "FirstSimilarIllnessDate", TimeFormat::Ymd),
        FieldDef::composite(30, "PatientChargeAdjustmentCode", &dt::CE),
        FieldDef::text(31, "RecurringServiceCode"),
        FieldDef::text(32, "BillingMediaCode"),
        FieldDef::timestamp(33, "ExpectedSurgeryDateAndTime", TimeFormat::YmdHms),
        FieldDef::text(34, "MilitaryPartnershipCode"),
        FieldDef::text(35, "MilitaryNonAvailabilityCode"),
        FieldDef::text(36, "NewbornBabyIndicator"),
        FieldDef::text(37, "BabyDetainedIndicator"),
        FieldDef::composite(38, "ModeOfArrivalCode", &dt::CE),
        FieldDef::composite(39, "RecreationalDrugUseCode", &dt::CE).repeated(),
        FieldDef::composite(40, "AdmissionLevelOfCareCode", &dt::CE),
        FieldDef::composite(41, "PrecautionCode", &dt::CE).repeated(),
        FieldDef::composite(42, "PatientConditionCode", &dt::CE),
        FieldDef::text(43, "LivingWillCode"),
        FieldDef::text(44, "OrganDonorCode"),
        FieldDef::composite(45, "AdvanceDirectiveCode", &dt::CE).repeated(),
        FieldDef::timestamp(46, "PatientStatusEffectiveDate", TimeFormat::Ymd),
        FieldDef::timestamp(47, "ExpectedLOAReturnDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(48, "ExpectedPreAdmissionTestingDateTime", TimeFormat::YmdHms),
        FieldDef::text(49, "NotifyClergyCode").repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static OBR: SegmentDef = SegmentDef {
    id: "OBR",
    name: "Observation Request",
    size: 49,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::composite(2, "PlacerOrderNumber", &dt::EI),
        FieldDef::composite(3, "FillerOrderNumber", &dt::EI),
        FieldDef::composite(4, "UniversalServiceIdentifier", &dt::CE),
        FieldDef::text(5, "PriorityOBR"),
        FieldDef::timestamp(6, "RequestedDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(7, "ObservationDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(8, "ObservationEndDateTime", TimeFormat::YmdHms),
        FieldDef::composite(9, "CollectionVolume", &dt::CQ),
        FieldDef::composite(10, "CollectorIdentifier", &dt::XCN).repeated(),
        FieldDef::text(11, "SpecimenActionCode"),
        FieldDef::composite(12, "DangerCode", &dt::CE),
        FieldDef::text(13, "RelevantClinicalInformation"),
        FieldDef::timestamp(14, "SpecimenReceivedDateTime", TimeFormat::YmdHms),
        FieldDef::composite(15, "SpecimenSource", &dt::SPS),
        FieldDef::composite(16, "OrderingProvider", &dt::XCN).repeated(),
        FieldDef::composite(17, "OrderCallbackPhoneNumber", &dt::XTN).repeated(),
        FieldDef::text(18, "PlacerField1"),
        FieldDef::text(19, "PlacerField2"),
        FieldDef::text(20, "FillerField1"),
        FieldDef::text(21, "FillerField2"),
        FieldDef::timestamp(22, "ResultsRptStatusChngDateTime", TimeFormat::YmdHms),
        FieldDef::composite(23, "ChargeToPractice", &dt::MOC),
        FieldDef::text(24, "DiagnosticServSectID"),
        FieldDef::text(25, "ResultStatus"),
        FieldDef::composite(26, "ParentResult", &dt::PRL),
        FieldDef::composite(27, "QuantityTiming", &dt::TQ).repeated(),
        FieldDef::composite(28, "ResultCopiesTo", &dt::XCN).repeated(),
        FieldDef::composite(29, "Parent", &dt::EIP),
        FieldDef::text(30, "TransportationMode"),
        FieldDef::composite(31, "ReasonForStudy", &dt::CE).repeated(),
        FieldDef::composite(32, "PrincipalResultInterpreter", &dt::NDL),
        FieldDef::composite(33, "AssistantResultInterpreter", &dt::NDL).repeated(),
        FieldDef::composite(34, "Technician", &dt::NDL).repeated(),
        FieldDef::composite(35, "Transcriptionist", &dt::NDL).repeated(),
        FieldDef::timestamp(36, "ScheduledDateTime", TimeFormat::YmdHms),
        FieldDef::text(37, "NumberOfSampleContainers"),
        FieldDef::composite(38, "TransportLogisticsOfCollectedSample", &dt::CE).repeated(),
        FieldDef::composite(39, "CollectorsComment", &dt::CE).repeated(),
        FieldDef::composite(40, "TransportArrangementResponsibility", &dt::CE),
        FieldDef::text(41, "TransportArranged"),
        FieldDef::text(42, "EscortRequired"),
        FieldDef::composite(43, "PlannedPatientTransportComment", &dt::CE).repeated(),
        FieldDef::composite(44, "ProcedureCode", &dt::CE),
        FieldDef::composite(45, "ProcedureCodeModifier", &dt::CE).repeated(),
        FieldDef::composite(46, "PlacerSupplementalServiceInformation", &dt::CE).repeated(),
        FieldDef::composite(47, "FillerSupplementalServiceInformation", &dt::CE).repeated(),
        FieldDef::composite(48, "MedicallyNecessaryDuplicateProcedureReason", &dt::CWE),
        FieldDef::text(49, "ResultHandling"),
    ],
    message_type: None,
    varies_by: None,
};

pub static OBX: SegmentDef = SegmentDef {
    id: "OBX",
    name: "Observation/Result",
    size: 19,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "ValueType"),
        FieldDef::composite(3, "ObservationIdentifier", &dt::CE),
        FieldDef::text(4, "ObservationSubID"),
        FieldDef::varies(5, "ObservationValue").repeated(),
        FieldDef::composite(6, "Units", &dt::CE),
        FieldDef::text(7, "ReferencesRange"),
        FieldDef::text(8, "AbnormalFlags").repeated(),
        FieldDef::text(9, "Probability"),
        FieldDef::text(10, "NatureOfAbnormalTest").repeated(),
        FieldDef::text(11, "ObservationResultStatus"),
        FieldDef::timestamp(12, "EffectiveDateOfReferenceRange", TimeFormat::YmdHms),
        FieldDef::text(13, "UserDefinedAccessChecks"),
        FieldDef::timestamp(14, "DateTimeOfTheObservation", TimeFormat::YmdHms),
        FieldDef::composite(15, "ProducersID", &dt::CE),
        FieldDef::composite(16, "ResponsibleObserver", &dt::XCN).repeated(),
        FieldDef::composite(17, "ObservationMethod", &dt::CE).repeated(),
        FieldDef::composite(18, "EquipmentInstanceIdentifier", &dt::EI).repeated(),
        FieldDef::timestamp(19, "DateTimeOfTheAnalysis", TimeFormat::YmdHms),
    ],
    message_type: None,
    varies_by: Some(2),
};

pub static ORC: SegmentDef = SegmentDef {
    id: "ORC",
    name: "Common Order",
    size: 25,
    fields: &[
        FieldDef::text(1, "OrderControl"),
        FieldDef::composite(2, "PlacerOrderNumber", &dt::EI),
        FieldDef::composite(3, "FillerOrderNumber", &dt::EI),
        FieldDef::composite(4, "PlacerGroupNumber", &dt::EI),
        FieldDef::text(5, "OrderStatus"),
        FieldDef::text(6, "ResponseFlag"),
        FieldDef::composite(7, "QuantityTiming", &dt::TQ).repeated(),
        FieldDef::composite(8, "ParentOrder", &dt::EIP),
        FieldDef::timestamp(9, "DateTimeOfTransaction", TimeFormat::YmdHms),
        FieldDef::composite(10, "EnteredBy", &dt::XCN).repeated(),
        FieldDef::composite(11, "VerifiedBy", &dt::XCN).repeated(),
        FieldDef::composite(12, "OrderingProvider", &dt::XCN).repeated(),
        FieldDef::composite(13, "EnterersLocation", &dt::PL),
        FieldDef::composite(14, "CallBackPhoneNumber", &dt::XTN).repeated(),
        FieldDef::timestamp(15, "OrderEffectiveDateTime", TimeFormat::YmdHms),
        FieldDef::composite(16, "OrderControlCodeReason", &dt::CE),
        FieldDef::composite(17, "EnteringOrganization", &dt::CE),
        FieldDef::composite(18, "EnteringDevice", &dt::CE),
        FieldDef::composite(19, "ActionBy", &dt::XCN).repeated(),
        FieldDef::composite(20, "AdvancedBeneficiaryNoticeCode", &dt::CE),
        FieldDef::composite(21, "OrderingFacilityName", &dt::XON).repeated(),
        FieldDef::composite(22, "OrderingFacilityAddress", &dt::XAD).repeated(),
        FieldDef::composite(23, "OrderingFacilityPhoneNumber", &dt::XTN).repeated(),
        FieldDef::composite(24, "OrderingProviderAddress", &dt::XAD).repeated(),
        FieldDef::composite(25, "OrderStatusModifier", &dt::CWE),
    ],
    message_type: None,
    varies_by: None,
};

pub static SPM: SegmentDef = SegmentDef {
    id: "SPM",
    name: "Specimen",
    size: 29,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::composite(2, "SpecimenID", &dt::EIP),
        FieldDef::composite(3, "SpecimenParentIDs", &dt::EIP).repeated(),
        FieldDef::composite(4, "SpecimenType", &dt::CWE),
        FieldDef::composite(5, "SpecimenTypeModifier", &dt::CWE).repeated(),
        FieldDef::composite(6, "SpecimenAdditives", &dt::CWE).repeated(),
        FieldDef::composite(7, "SpecimenCollectionMethod", &dt::CWE),
        FieldDef::composite(8, "SpecimenSourceSite", &dt::CWE),
        FieldDef::composite(9, "SpecimenSourceSiteModifier", &dt::CWE).repeated(),
        FieldDef::composite(10, "SpecimenCollectionSite", &dt::CWE),
        FieldDef::composite(11, "SpecimenRole", &dt::CWE).repeated(),
        FieldDef::composite(12, "SpecimenCollectionAmount", &dt::CQ),
        FieldDef::text(13, "GroupedSpecimenCount"),
        FieldDef::text(14, "SpecimenDescription").repeated(),
        FieldDef::composite(15, "SpecimenHandlingCode", &dt::CWE).repeated(),
        FieldDef::composite(16, "SpecimenRiskCode", &dt::CWE).repeated(),
        FieldDef::composite(17, "SpecimenCollectionDateTime", &dt::DR),
        FieldDef::timestamp(18, "SpecimenReceivedDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(19, "SpecimenExpirationDateTime", TimeFormat::YmdHms),
        FieldDef::text(20, "SpecimenAvailability"),
        FieldDef::composite(21, "SpecimenRejectReason", &dt::CWE).repeated(),
        FieldDef::composite(22, "SpecimenQuality", &dt::CWE),
        FieldDef::composite(23, "SpecimenAppropriateness", &dt::CWE),
        FieldDef::composite(24, "SpecimenCondition", &dt::CWE).repeated(),
        FieldDef::composite(25, "SpecimenCurrentQuantity", &dt::CQ),
        FieldDef::text(26, "NumberOfSpecimenContainers"),
        FieldDef::composite(27, "ContainerType", &dt::CWE),
        FieldDef::composite(28, "ContainerCondition", &dt::CWE),
        FieldDef::composite(29, "SpecimenChildRole", &dt::CWE),
    ],
    message_type: None,
    varies_by: None,
};

pub static SAC: SegmentDef = SegmentDef {
    id: "SAC",
    name: "Specimen Container Detail",
    size: 44,
    fields: &[
        FieldDef::composite(1, "ExternalAccessionIdentifier", &dt::EI),
        FieldDef::composite(2, "AccessionIdentifier", &dt::EI),
        FieldDef::composite(3, "ContainerIdentifier", &dt::EI),
        FieldDef::composite(4, "PrimaryParentContainerIdentifier", &dt::EI),
        FieldDef::composite(5, "EquipmentContainerIdentifier", &dt::EI),
        FieldDef::composite(6, "SpecimenSource", &dt::SPS),
        FieldDef::timestamp(7, "RegistrationDateTime", TimeFormat::YmdHms),
        FieldDef::composite(8, "ContainerStatus", &dt::CE),
        FieldDef::composite(9, "CarrierType", &dt::CE),
        FieldDef::composite(10, "CarrierIdentifier", &dt::EI),
        FieldDef::composite(11, "PositionInCarrier", &dt::NA),
        FieldDef::composite(12, "TrayTypeSAC", &dt::CE),
        FieldDef::composite(13, "TrayIdentifier", &dt::EI),
        FieldDef::composite(14, "PositionInTray", &dt::NA),
        FieldDef::composite(15, "Location", &dt::CE).repeated(),
        FieldDef::text(16, "ContainerHeight"),
        FieldDef::text(17, "ContainerDiameter"),
        FieldDef::text(18, "BarrierDelta"),
        FieldDef::text(19, "BottomDelta"),
        FieldDef::composite(20, "ContainerHeightDiameterDeltaUnits", &dt::CE),
        FieldDef::text(21, "ContainerVolume"),
        FieldDef::text(22, "AvailableSpecimenVolume"),
        FieldDef::text(23, "InitialSpecimenVolume"),
        FieldDef::composite(24, "VolumeUnits", &dt::CE),
        FieldDef::composite(25, "SeparatorType", &dt::CE),
        FieldDef::composite(26, "CapType", &dt::CE),
        FieldDef::composite(27, "Additive", &dt::CWE).repeated(),
        FieldDef::composite(28, "SpecimenComponent", &dt::CE),
        FieldDef::composite(29, "DilutionFactor", &dt::SN),
        FieldDef::composite(30, "Treatment", &dt::CE),
        FieldDef::composite(31, "Temperature", &dt::SN),
        FieldDef::text(32, "HemolysisIndex"),
        FieldDef::composite(33, "HemolysisIndexUnits", &dt::CE),
        FieldDef::text(34, "LipemiaIndex"),
        FieldDef::composite(35, "LipemiaIndexUnits", &dt::CE),
        FieldDef::text(36, "IcterusIndex"),
        FieldDef::composite(37, "IcterusIndexUnits", &dt::CE),
        FieldDef::text(38, "FibrinIndex"),
        FieldDef::composite(39, "FibrinIndexUnits", &dt::CE),
        FieldDef::composite(40, "SystemInducedContaminants", &dt::CE).repeated(),
        FieldDef::composite(41, "DrugInterference", &dt::CE).repeated(),
        FieldDef::composite(42, "ArtificialBlood", &dt::CE),
        FieldDef::composite(43, "SpecialHandlingCode", &dt::CWE).repeated(),
        FieldDef::composite(44, "OtherEnvironmentalFactors", &dt::CE).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static SCH: SegmentDef = SegmentDef {
    id: "SCH",
    name: "Scheduling Activity Information",
    size: 27,
    fields: &[
        FieldDef::composite(1, "PlacerAppointmentID", &dt::EI),
        FieldDef::composite(2, "FillerAppointmentID", &dt::EI),
        FieldDef::text(3, "OccurrenceNumber"),
        FieldDef::composite(4, "PlacerGroupNumber", &dt::EI),
        FieldDef::composite(5, "ScheduleID", &dt::CE),
        FieldDef::composite(6, "EventReason", &dt::CE),
        FieldDef::composite(7, "AppointmentReason", &dt::CE),
        FieldDef::composite(8, "AppointmentType", &dt::CE),
        FieldDef::text(9, "AppointmentDuration"),
        FieldDef::composite(10, "AppointmentDurationUnits", &dt::CE),
        FieldDef::composite(11, "AppointmentTimingQuantity", &dt::TQ).repeated(),
        FieldDef::composite(12, "PlacerContactPerson", &dt::XCN).repeated(),
        FieldDef::composite(13, "PlacerContactPhoneNumber", &dt::XTN),
        FieldDef::composite(14, "PlacerContactAddress", &dt::XAD).repeated(),
        FieldDef::composite(15, "PlacerContactLocation", &dt::PL),
        FieldDef::composite(16, "FillerContactPerson", &dt::XCN).repeated(),
        FieldDef::composite(17, "FillerContactPhoneNumber", &dt::XTN),
        FieldDef::composite(18, "FillerContactAddress", &dt::XAD).repeated(),
        FieldDef::composite(19, "FillerContactLocation", &dt::PL),
        FieldDef::composite(20, "EnteredByPerson", &dt::XCN).repeated(),
        FieldDef::composite(21, "EnteredByPhoneNumber", &dt::XTN).repeated(),
        FieldDef::composite(22, "EnteredByLocation", &dt::PL),
        FieldDef::composite(23, "ParentPlacerAppointmentID", &dt::EI),
        FieldDef::composite(24, "ParentFillerAppointmentID", &dt::EI),
        FieldDef::composite(25, "FillerStatusCode", &dt::CE),
        FieldDef::composite(26, "PlacerOrderNumber", &dt::EI).repeated(),
        FieldDef::composite(27, "FillerOrderNumber", &dt::EI).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static RGS: SegmentDef = SegmentDef {
    id: "RGS",
    name: "Resource Group",
    size: 3,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SegmentActionCode"),
        FieldDef::composite(3, "ResourceGroupID", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static AIS: SegmentDef = SegmentDef {
    id: "AIS",
    name: "Appointment Information",
    size: 12,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SegmentActionCode"),
        FieldDef::composite(3, "UniversalServiceIdentifier", &dt::CE),
        FieldDef::timestamp(4, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::text(5, "StartDateTimeOffset"),
        FieldDef::composite(6, "StartDateTimeOffsetUnits", &dt::CE),
        FieldDef::text(7, "Duration"),
        FieldDef::composite(8, "DurationUnits", &dt::CE),
        FieldDef::text(9, "AllowSubstitutionCode"),
        FieldDef::composite(10, "FillerStatusCode", &dt::CE),
        FieldDef::composite(11, "PlacerSupplementalServiceInformation", &dt::CE).repeated(),
        FieldDef::composite(12, "FillerSupplementalServiceInformation", &dt::CE).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static AIG: SegmentDef = SegmentDef {
    id: "AIG",
    name: "Appointment Information - General Resource",
    size: 14,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SegmentActionCode"),
        FieldDef::composite(3, "ResourceID", &dt::CE),
        FieldDef::composite(4, "ResourceType", &dt::CE),
        FieldDef::composite(5, "ResourceGroup", &dt::CE).repeated(),
        FieldDef::text(6, "ResourceQuantity"),
        FieldDef::composite(7, "ResourceQuantityUnits", &dt::CE),
        FieldDef::timestamp(8, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::text(9, "StartDateTimeOffset"),
        FieldDef::composite(10, "StartDateTimeOffsetUnits", &dt::CE),
        FieldDef::text(11, "Duration"),
        FieldDef::composite(12, "DurationUnits", &dt::CE),
        FieldDef::text(13, "AllowSubstitutionCode"),
        FieldDef::composite(14, "FillerStatusCode", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static AIL: SegmentDef = SegmentDef {
    id: "AIL",
    name: "Appointment Information - Location Resource",
    size: 12,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SegmentActionCode"),
        FieldDef::composite(3, "LocationResourceID", &dt::PL).repeated(),
        FieldDef::composite(4, "LocationTypeAIL", &dt::CE),
        FieldDef::composite(5, "LocationGroup", &dt::CE),
        FieldDef::timestamp(6, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::text(7, "StartDateTimeOffset"),
        FieldDef::composite(8, "StartDateTimeOffsetUnits", &dt::CE),
        FieldDef::text(9, "Duration"),
        FieldDef::composite(10, "DurationUnits", &dt::CE),
        FieldDef::text(11, "AllowSubstitutionCode"),
        FieldDef::composite(12, "FillerStatusCode", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static AIP: SegmentDef = SegmentDef {
    id: "AIP",
    name: "Appointment Information - Personnel Resource",
    size: 12,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SegmentActionCode"),
        FieldDef::composite(3, "PersonnelResourceID", &dt::XCN).repeated(),
        FieldDef::composite(4, "ResourceType", &dt::CE),
        FieldDef::composite(5, "ResourceGroup", &dt::CE),
        FieldDef::timestamp(6, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::text(7, "StartDateTimeOffset"),
        FieldDef::composite(8, "StartDateTimeOffsetUnits", &dt::CE),
        FieldDef::text(9, "Duration"),
        FieldDef::composite(10, "DurationUnits", &dt::CE),
        FieldDef::text(11, "AllowSubstitutionCode"),
        FieldDef::composite(12, "FillerStatusCode", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static DG1: SegmentDef = SegmentDef {
    id: "DG1",
    name: "Diagnosis",
    size: 21,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "DiagnosisCodingMethod"),
        FieldDef::composite(3, "DiagnosisCodeDG1", &dt::CE),
        FieldDef::text(4, "DiagnosisDescription"),
        FieldDef::timestamp(5, "DiagnosisDateTime", TimeFormat::YmdHms),
        FieldDef::text(6, "DiagnosisType"),
        FieldDef::composite(7, "MajorDiagnosticCategory", &dt::CE),
        FieldDef::composite(8, "DiagnosticRelatedGroup", &dt::CE),
        FieldDef::text(9, "DRGApprovalIndicator"),
        FieldDef::text(10, "DRGGrouperReviewCode"),
        FieldDef::composite(11, "OutlierType", &dt::CE),
        FieldDef::text(12, "OutlierDays"),
        FieldDef::composite(13, "OutlierCost", &dt::CP),
        FieldDef::text(14, "GrouperVersionAndType"),
        FieldDef::text(15, "DiagnosisPriority"),
        FieldDef::composite(16, "DiagnosingClinician", &dt::XCN).repeated(),
        FieldDef::text(17, "DiagnosisClassification"),
        FieldDef::text(18, "ConfidentialIndicator"),
        FieldDef::timestamp(19, "AttestationDateTime", TimeFormat::YmdHms),
        FieldDef::composite(20, "DiagnosisIdentifier", &dt::EI),
        FieldDef::text(21, "DiagnosisActionCode"),
    ],
    message_type: None,
    varies_by: None,
};

pub static TQ1: SegmentDef = SegmentDef {
    id: "TQ1",
    name: "Timing/Quantity",
    size: 14,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::composite(2, "Quantity", &dt::CQ),
        FieldDef::composite(3, "RepeatPattern", &dt::RPT).repeated(),
        FieldDef::timestamp(4, "ExplicitTime", TimeFormat::Hm).repeated(),
        FieldDef::composite(5, "RelativeTimeAndUnits", &dt::CQ).repeated(),
        FieldDef::composite(6, "ServiceDuration", &dt::CQ),
        FieldDef::timestamp(7, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(8, "EndDateTime", TimeFormat::YmdHms),
        FieldDef::composite(9, "Priority", &dt::CWE).repeated(),
        FieldDef::text(10, "ConditionText"),
        FieldDef::text(11, "TextInstruction"),
        FieldDef::text(12, "Conjunction"),
        FieldDef::composite(13, "OccurrenceDuration", &dt::CQ),
        FieldDef::text(14, "TotalOccurrences"),
    ],
    message_type: None,
    varies_by: None,
};

pub static TQ2: SegmentDef = SegmentDef {
    id: "TQ2",
    name: "Timing/Quantity Relationship",
    size: 10,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "SequenceResultsFlag"),
        FieldDef::composite(3, "RelatedPlacerNumber", &dt::EI).repeated(),
        FieldDef::composite(4, "RelatedFillerNumber", &dt::EI).repeated(),
        FieldDef::composite(5, "RelatedPlacerGroupNumber", &dt::EI).repeated(),
        FieldDef::text(6, "SequenceConditionCode"),
        FieldDef::text(7, "CyclicEntryExitIndicator"),
        FieldDef::composite(8, "SequenceConditionTimeInterval", &dt::CQ),
        FieldDef::text(9, "CyclicGroupMaximumNumberOfRepeats"),
        FieldDef::text(10, "SpecialServiceRequestRelationship"),
    ],
    message_type: None,
    varies_by: None,
};

pub static CTD: SegmentDef = SegmentDef {
    id: "CTD",
    name: "Contact Data",
    size: 7,
    fields: &[
        FieldDef::composite(1, "ContactRole", &dt::CE).repeated(),
        FieldDef::composite(2, "ContactName", &dt::XPN).repeated(),
        FieldDef::composite(3, "ContactAddress", &dt::XAD).repeated(),
        FieldDef::composite(4, "ContactLocation", &dt::PL),
        FieldDef::composite(5, "ContactCommunicationInformation", &dt::XTN).repeated(),
        FieldDef::composite(6, "PreferredMethodOfContact", &dt::CE),
        FieldDef::composite(7, "ContactIdentifiers", &dt::PLN).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static CTI: SegmentDef = SegmentDef {
    id: "CTI",
    name: "Clinical Trial Identification",
    size: 3,
    fields: &[
        FieldDef::composite(1, "SponsorStudyID", &dt::EI),
        FieldDef::composite(2, "StudyPhaseIdentifier", &dt::CE),
        FieldDef::composite(3, "StudyScheduledTimePoint", &dt::CE),
    ],
    message_type: None,
    varies_by: None,
};

pub static FT1: SegmentDef = SegmentDef {
    id: "FT1",
    name: "Financial Transaction",
    size: 26,
    fields: &[
        FieldDef::text(1, "SetID").seq(),
        FieldDef::text(2, "TransactionID"),
        FieldDef::text(3, "TransactionBatchID"),
        FieldDef::composite(4, "TransactionDate", &dt::DR),
        FieldDef::timestamp(5, "TransactionPostingDate", TimeFormat::YmdHms),
        FieldDef::text(6, "TransactionType"),
        FieldDef::composite(7, "TransactionCode", &dt::CE),
        FieldDef::text(8, "TransactionDescription"),
        FieldDef::text(9, "TransactionDescriptionAlt"),
        FieldDef::text(10, "TransactionQuantity"),
        FieldDef::composite(11, "TransactionAmountExtended", &dt::CP),
        FieldDef::composite(12, "TransactionAmountUnit", &dt::CP),
        FieldDef::composite(13, "DepartmentCode", &dt::CE),
        FieldDef::composite(14, "InsurancePlanID", &dt::CE),
        FieldDef::composite(15, "InsuranceAmount", &dt::CP),
        FieldDef::composite(16, "AssignedPatientLocation", &dt::PL),
        FieldDef::text(17, "FeeSchedule"),
        FieldDef::text(18, "PatientType"),
        FieldDef::composite(19, "DiagnosisCodeFT1", &dt::CE).repeated(),
        FieldDef::composite(20, "PerformedByCode", &dt::XCN).repeated(),
        FieldDef::composite(21, "OrderedByCode", &dt::XCN).repeated(),
        FieldDef::composite(22, "UnitCost", &dt::CP),
        FieldDef::composite(23, "FillerOrderNumber", &dt::EI),
        FieldDef::composite(24, "EnteredByCode", &dt::XCN).repeated(),
        FieldDef::composite(25, "ProcedureCode", &dt::CE),
        FieldDef::composite(26, "ProcedureCodeModifier", &dt::CE).repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static DSC: SegmentDef = SegmentDef {
    id: "DSC",
    name: "Continuation Pointer",
    size: 2,
    fields: &[
        FieldDef::text(1, "ContinuationPointer"),
        FieldDef::text(2, "ContinuationStyle"),
    ],
    message_type: None,
    varies_by: None,
};

pub static BHS: SegmentDef = SegmentDef {
    id: "BHS",
    name: "Batch Header",
    size: 12,
    fields: &[
        FieldDef::text(1, "BatchFieldSeparator").separator_marker(),
        FieldDef::text(2, "BatchEncodingCharacters").encoding_marker(),
        FieldDef::composite(3, "BatchSendingApplication", &dt::HD),
        FieldDef::composite(4, "BatchSendingFacility", &dt::HD),
        FieldDef::composite(5, "BatchReceivingApplication", &dt::HD),
        FieldDef::composite(6, "BatchReceivingFacility", &dt::HD),
        FieldDef::timestamp(7, "BatchCreationDateTime", TimeFormat::YmdHms),
        FieldDef::text(8, "BatchSecurity"),
        FieldDef::text(9, "BatchNameIDType"),
        FieldDef::text(10, "BatchComment"),
        FieldDef::text(11, "BatchControlID"),
        FieldDef::text(12, "ReferenceBatchControlID"),
    ],
    message_type: None,
    varies_by: None,
};

pub static BTS: SegmentDef = SegmentDef {
    id: "BTS",
    name: "Batch Trailer",
    size: 3,
    fields: &[
        FieldDef::text(1, "BatchMessageCount"),
        FieldDef::text(2, "BatchComment"),
        FieldDef::text(3, "BatchTotals").repeated(),
    ],
    message_type: None,
    varies_by: None,
};

pub static FHS: SegmentDef = SegmentDef {
    id: "FHS",
    name: "File Header",
    size: 12,
    fields: &[
        FieldDef::text(1, "FileFieldSeparator").separator_marker(),
        FieldDef::text(2, "FileEncodingCharacters").encoding_marker(),
        FieldDef::composite(3, "FileSendingApplication", &dt::HD),
        FieldDef::composite(4, "FileSendingFacility", &dt::HD),
        FieldDef::composite(5, "FileReceivingApplication", &dt::HD),
        FieldDef::composite(6, "FileReceivingFacility", &dt::HD),
        FieldDef::timestamp(7, "FileCreationDateTime", TimeFormat::YmdHms),
        FieldDef::text(8, "FileSecurity"),
        FieldDef::text(9, "FileNameID"),
        FieldDef::text(10, "FileHeaderComment"),
        FieldDef::text(11, "FileControlID"),
        FieldDef::text(12, "ReferenceFileControlID"),
    ],
    message_type: None,
    varies_by: None,
};

pub static FTS: SegmentDef = SegmentDef {
    id: "FTS",
    name: "File Trailer",
    size: 2,
    fields: &[
        FieldDef::text(1, "FileBatchCount"),
        FieldDef::text(2, "FileTrailerComment"),
    ],
    message_type: None,
    varies_by: None,
};
