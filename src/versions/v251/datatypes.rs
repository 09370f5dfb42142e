//! Data-type tables for HL7 v2.5.1

use crate::core::temporal::TimeFormat;
use crate::registry::{DataTypeDef, DataTypeKind, FieldDef};

/// Look up a data type by identifier.
pub fn lookup(id: &str) -> Option<&'static DataTypeDef> {
    match id {
        "CE" => Some(&CE),
        "CNN" => Some(&CNN),
        "CP" => Some(&CP),
        "CQ" => Some(&CQ),
        "CWE" => Some(&CWE),
        "CX" => Some(&CX),
        "DLD" => Some(&DLD),
        "DLN" => Some(&DLN),
        "DR" => Some(&DR),
        "DT" => Some(&DT),
        "DTM" => Some(&DTM),
        "EI" => Some(&EI),
        "EIP" => Some(&EIP),
        "ELD" => Some(&ELD),
        "ERL" => Some(&ERL),
        "FC" => Some(&FC),
        "FN" => Some(&FN),
        "FT" => Some(&FT),
        "HD" => Some(&HD),
        "ID" => Some(&ID),
        "IS" => Some(&IS),
        "JCC" => Some(&JCC),
        "MO" => Some(&MO),
        "MOC" => Some(&MOC),
        "MSG" => Some(&MSG),
        "NA" => Some(&NA),
        "NDL" => Some(&NDL),
        "NM" => Some(&NM),
        "OSD" => Some(&OSD),
        "PL" => Some(&PL),
        "PLN" => Some(&PLN),
        "PRL" => Some(&PRL),
        "PT" => Some(&PT),
        "RI" => Some(&RI),
        "RPT" => Some(&RPT),
        "SAD" => Some(&SAD),
        "SI" => Some(&SI),
        "SN" => Some(&SN),
        "SPS" => Some(&SPS),
        "ST" => Some(&ST),
        "TM" => Some(&TM),
        "TQ" => Some(&TQ),
        "TS" => Some(&TS),
        "TX" => Some(&TX),
        "VARIES" => Some(&VARIES),
        "VID" => Some(&VID),
        "XAD" => Some(&XAD),
        "XCN" => Some(&XCN),
        "XON" => Some(&XON),
        "XPN" => Some(&XPN),
        "XTN" => Some(&XTN),
        _ => None,
    }
}

pub static ST: DataTypeDef = DataTypeDef {
    id: "ST",
    name: "String Data",
    kind: DataTypeKind::Text,
};

pub static ID: DataTypeDef = DataTypeDef {
    id: "ID",
    name: "Coded Value for HL7 Defined Tables",
    kind: DataTypeKind::Text,
};

pub static IS: DataTypeDef = DataTypeDef {
    id: "IS",
    name: "Coded Value for User-Defined Tables",
    kind: DataTypeKind::Text,
};

pub static NM: DataTypeDef = DataTypeDef {
    id: "NM",
    name: "Numeric",
    kind: DataTypeKind::Text,
};

pub static SI: DataTypeDef = DataTypeDef {
    id: "SI",
    name: "Sequence ID",
    kind: DataTypeKind::Text,
};

pub static TX: DataTypeDef = DataTypeDef {
    id: "TX",
    name: "Text Data",
    kind: DataTypeKind::Text,
};

pub static FT: DataTypeDef = DataTypeDef {
    id: "FT",
    name: "Formatted Text Data",
    kind: DataTypeKind::Text,
};

pub static VARIES: DataTypeDef = DataTypeDef {
    id: "VARIES",
    name: "Variable Datatype",
    kind: DataTypeKind::Text,
};

pub static DT: DataTypeDef = DataTypeDef {
    id: "DT",
    name: "Date",
    kind: DataTypeKind::Timestamp(TimeFormat::Ymd),
};

pub static TM: DataTypeDef = DataTypeDef {
    id: "TM",
    name: "Time",
    kind: DataTypeKind::Timestamp(TimeFormat::Hm),
};

pub static DTM: DataTypeDef = DataTypeDef {
    id: "DTM",
    name: "Date/Time",
    kind: DataTypeKind::Timestamp(TimeFormat::YmdHms),
};

pub static TS: DataTypeDef = DataTypeDef {
    id: "TS",
    name: "Time Stamp",
    kind: DataTypeKind::Timestamp(TimeFormat::YmdHms),
};

pub static CE: DataTypeDef = DataTypeDef {
    id: "CE",
    name: "Coded Element",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Identifier"),
        FieldDef::text(2, "Text"),
        FieldDef::text(3, "NameOfCodingSystem"),
        FieldDef::text(4, "AlternateIdentifier"),
        FieldDef::text(5, "AlternateText"),
        FieldDef::text(6, "NameOfAlternateCodingSystem"),
    ]),
};

pub static CWE: DataTypeDef = DataTypeDef {
    id: "CWE",
    name: "Coded with Exceptions",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Identifier"),
        FieldDef::text(2, "Text"),
        FieldDef::text(3, "NameOfCodingSystem"),
        FieldDef::text(4, "AlternateIdentifier"),
        FieldDef::text(5, "AlternateText"),
        FieldDef::text(6, "NameOfAlternateCodingSystem"),
        FieldDef::text(7, "CodingSystemVersionID"),
        FieldDef::text(8, "AlternateCodingSystemVersionID"),
        FieldDef::text(9, "OriginalText"),
    ]),
};

pub static CNN: DataTypeDef = DataTypeDef {
    id: "CNN",
    name: "Composite ID Number and Name Simplified",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "IDNumber"),
        FieldDef::text(2, "FamilyName"),
        FieldDef::text(3, "GivenName"),
        FieldDef::text(4, "SecondAndFurtherGivenNamesOrInitialsThereof"),
        FieldDef::text(5, "Suffix"),
        FieldDef::text(6, "Prefix"),
        FieldDef::text(7, "Degree"),
        FieldDef::text(8, "SourceTable"),
        FieldDef::text(9, "AssigningAuthorityNamespaceID"),
        FieldDef::text(10, "AssigningAuthorityUniversalID"),
        FieldDef::text(11, "AssigningAuthorityUniversalIDType"),
    ]),
};

pub static CP: DataTypeDef = DataTypeDef {
    id: "CP",
    name: "Composite Price",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "Price", &MO),
        FieldDef::text(2, "PriceType"),
        FieldDef::text(3, "FromValue"),
        FieldDef::text(4, "ToValue"),
        FieldDef::composite(5, "RangeUnits", &CE),
        FieldDef::text(6, "RangeType"),
    ]),
};

pub static CQ: DataTypeDef = DataTypeDef {
    id: "CQ",
    name: "Composite Quantity with Units",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Quantity"),
        FieldDef::composite(2, "Units", &CE),
    ]),
};

pub static CX: DataTypeDef = DataTypeDef {
    id: "CX",
    name: "Extended Composite ID with Check Digit",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "IDNumber"),
        FieldDef::text(2, "CheckDigit"),
        FieldDef::text(3, "CheckDigitScheme"),
        FieldDef::composite(4, "AssigningAuthority", &HD),
        FieldDef::text(5, "IdentifierTypeCode"),
        FieldDef::composite(6, "AssigningFacility", &HD),
        FieldDef::timestamp(7, "EffectiveDate", TimeFormat::Ymd),
        FieldDef::timestamp(8, "ExpirationDate", TimeFormat::Ymd),
        FieldDef::composite(9, "AssigningJurisdiction", &CWE),
        FieldDef::composite(10, "AssigningAgencyOrDepartment", &CWE),
    ]),
};

pub static DLD: DataTypeDef = DataTypeDef {
    id: "DLD",
    name: "Discharge to Location and Date",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "DischargeLocation"),
        FieldDef::timestamp(2, "EffectiveDate", TimeFormat::YmdHms),
    ]),
};

pub static DLN: DataTypeDef = DataTypeDef {
    id: "DLN",
    name: "Driver's License Number",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "LicenseNumber"),
        FieldDef::text(2, "IssuingStateProvinceCountry"),
        FieldDef::timestamp(3, "ExpirationDate", TimeFormat::Ymd),
    ]),
};

pub static DR: DataTypeDef = DataTypeDef {
    id: "DR",
    name: "Date/Time Range",
    kind: DataTypeKind::Composite(&[
        FieldDef::timestamp(1, "RangeStartDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(2, "RangeEndDateTime", TimeFormat::YmdHms),
    ]),
};

pub static EI: DataTypeDef = DataTypeDef {
    id: "EI",
    name: "Entity Identifier",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "EntityIdentifier"),
        FieldDef::text(2, "NamespaceID"),
        FieldDef::text(3, "UniversalID"),
        FieldDef::text(4, "UniversalIDType"),
    ]),
};

pub static EIP: DataTypeDef = DataTypeDef {
    id: "EIP",
    name: "Entity Identifier Pair",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "PlacerAssignedIdentifier", &EI),
        FieldDef::composite(2, "FillerAssignedIdentifier", &EI),
    ]),
};

pub static ELD: DataTypeDef = DataTypeDef {
    id: "ELD",
    name: "Error Location and Description",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "SegmentID"),
        FieldDef::text(2, "SegmentSequence"),
        FieldDef::text(3, "FieldPosition"),
        FieldDef::composite(4, "CodeIdentifyingError", &CE),
    ]),
};

pub static ERL: DataTypeDef = DataTypeDef {
    id: "ERL",
    name: "Error Location",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "SegmentID"),
        FieldDef::text(2, "SegmentSequence"),
        FieldDef::text(3, "FieldPosition"),
        FieldDef::text(4, "FieldRepetition"),
        FieldDef::text(5, "ComponentNumber"),
        FieldDef::text(6, "SubComponentNumber"),
    ]),
};

pub static FC: DataTypeDef = DataTypeDef {
    id: "FC",
    name: "Financial Class",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "FinancialClassCode"),
        FieldDef::timestamp(2, "EffectiveDate", TimeFormat::YmdHms),
    ]),
};

pub static FN: DataTypeDef = DataTypeDef {
    id: "FN",
    name: "Family Name",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Surname"),
        FieldDef::text(2, "OwnSurnamePrefix"),
        FieldDef::text(3, "OwnSurname"),
        FieldDef::text(4, "SurnamePrefixFromPartnerSpouse"),
        FieldDef::text(5, "SurnameFromPartnerSpouse"),
    ]),
};

pub static HD: DataTypeDef = DataTypeDef {
    id: "HD",
    name: "Hierarchic Designator",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "NamespaceID"),
        FieldDef::text(2, "UniversalID"),
        FieldDef::text(3, "UniversalIDType"),
    ]),
};

pub static JCC: DataTypeDef = DataTypeDef {
    id: "JCC",
    name: "Job Code/Class",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "JobCode"),
        FieldDef::text(2, "JobClass"),
        FieldDef::text(3, "JobDescriptionText"),
    ]),
};

pub static MO: DataTypeDef = DataTypeDef {
    id: "MO",
    name: "Money",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Quantity"),
        FieldDef::text(2, "Denomination"),
    ]),
};

pub static MOC: DataTypeDef = DataTypeDef {
    id: "MOC",
    name: "Money and Charge Code",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "MonetaryAmount", &MO),
        FieldDef::composite(2, "ChargeCode", &CE),
    ]),
};

pub static MSG: DataTypeDef = DataTypeDef {
    id: "MSG",
    name: "Message Type",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "MessageCode"),
        FieldDef::text(2, "TriggerEvent"),
        FieldDef::text(3, "MessageStructure"),
    ]),
};

pub static NA: DataTypeDef = DataTypeDef {
    id: "NA",
    name: "Numeric Array",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Value1"),
        FieldDef::text(2, "Value2"),
        FieldDef::text(3, "Value3"),
        FieldDef::text(4, "Value4"),
    ]),
};

pub static NDL: DataTypeDef = DataTypeDef {
    id: "NDL",
    name: "Name with Date and Location",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "Name", &CNN),
        FieldDef::timestamp(2, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(3, "EndDateTime", TimeFormat::YmdHms),
        FieldDef::text(4, "PointOfCare"),
        FieldDef::text(5, "Room"),
        FieldDef::text(6, "Bed"),
        FieldDef::composite(7, "Facility", &HD),
        FieldDef::text(8, "LocationStatus"),
        FieldDef::text(9, "PatientLocationType"),
        FieldDef::text(10, "Building"),
        FieldDef::text(11, "Floor"),
    ]),
};

pub static OSD: DataTypeDef = DataTypeDef {
    id: "OSD",
    name: "Order Sequence Definition",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "SequenceResultsFlag"),
        FieldDef::text(2, "PlacerOrderNumberEntityIdentifier"),
        FieldDef::text(3, "PlacerOrderNumberNamespaceID"),
        FieldDef::text(4, "FillerOrderNumberEntityIdentifier"),
        FieldDef::text(5, "FillerOrderNumberNamespaceID"),
        FieldDef::text(6, "SequenceConditionValue"),
        FieldDef::text(7, "MaximumNumberOfRepeats"),
        FieldDef::text(8, "PlacerOrderNumberUniversalID"),
        FieldDef::text(9, "PlacerOrderNumberUniversalIDType"),
        FieldDef::text(10, "FillerOrderNumberUniversalID"),
        FieldDef::text(11, "FillerOrderNumberUniversalIDType"),
    ]),
};

pub static PL: DataTypeDef = DataTypeDef {
    id: "PL",
    name: "Person Location",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "PointOfCare"),
        FieldDef::text(2, "Room"),
        FieldDef::text(3, "Bed"),
        FieldDef::composite(4, "Facility", &HD),
        FieldDef::text(5, "LocationStatus"),
        FieldDef::text(6, "PersonLocationType"),
        FieldDef::text(7, "Building"),
        FieldDef::text(8, "Floor"),
        FieldDef::text(9, "LocationDescription"),
        FieldDef::composite(10, "ComprehensiveLocationIdentifier", &EI),
        FieldDef::composite(11, "AssigningAuthorityForLocation", &HD),
    ]),
};

pub static PLN: DataTypeDef = DataTypeDef {
    id: "PLN",
    name: "Practitioner License or Other ID Number",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "IDNumber"),
        FieldDef::text(2, "TypeOfIDNumber"),
        FieldDef::text(3, "StateOtherQualifyingInformation"),
        FieldDef::timestamp(4, "ExpirationDate", TimeFormat::Ymd),
    ]),
};

pub static PRL: DataTypeDef = DataTypeDef {
    id: "PRL",
    name: "Parent Result Link",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "ParentObservationIdentifier", &CE),
        FieldDef::text(2, "ParentObservationSubIdentifier"),
        FieldDef::text(3, "ParentObservationValueDescriptor"),
    ]),
};

pub static PT: DataTypeDef = DataTypeDef {
    id: "PT",
    name: "Processing Type",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "ProcessingID"),
        FieldDef::text(2, "ProcessingMode"),
    ]),
};

pub static RI: DataTypeDef = DataTypeDef {
    id: "RI",
    name: "Repeat Interval",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "RepeatPattern"),
        FieldDef::text(2, "ExplicitTimeInterval"),
    ]),
};

pub static RPT: DataTypeDef = DataTypeDef {
    id: "RPT",
    name: "Repeat Pattern",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "RepeatPatternCode", &CWE),
        FieldDef::text(2, "CalendarAlignment"),
        FieldDef::text(3, "PhaseRangeBeginValue"),
        FieldDef::text(4, "PhaseRangeEndValue"),
        FieldDef::text(5, "PeriodQuantity"),
        FieldDef::text(6, "PeriodUnits"),
        FieldDef::text(7, "InstitutionSpecifiedTime"),
        FieldDef::text(8, "Event"),
        FieldDef::text(9, "EventOffsetQuantity"),
        FieldDef::text(10, "EventOffsetUnits"),
        FieldDef::text(11, "GeneralTimingSpecification"),
    ]),
};

pub static SAD: DataTypeDef = DataTypeDef {
    id: "SAD",
    name: "Street Address",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "StreetOrMailingAddress"),
        FieldDef::text(2, "StreetName"),
        FieldDef::text(3, "DwellingNumber"),
    ]),
};

pub static SN: DataTypeDef = DataTypeDef {
    id: "SN",
    name: "Structured Numeric",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "Comparator"),
        FieldDef::text(2, "Num1"),
        FieldDef::text(3, "SeparatorSuffix"),
        FieldDef::text(4, "Num2"),
    ]),
};

pub static SPS: DataTypeDef = DataTypeDef {
    id: "SPS",
    name: "Specimen Source",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "SpecimenSourceNameOrCode", &CWE),
        FieldDef::composite(2, "Additives", &CWE),
        FieldDef::text(3, "SpecimenCollectionMethod"),
        FieldDef::composite(4, "BodySite", &CWE),
        FieldDef::composite(5, "SiteModifier", &CWE),
        FieldDef::composite(6, "CollectionMethodModifierCode", &CWE),
        FieldDef::composite(7, "SpecimenRole", &CWE),
    ]),
};

pub static TQ: DataTypeDef = DataTypeDef {
    id: "TQ",
    name: "Timing Quantity",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "Quantity", &CQ),
        FieldDef::composite(2, "Interval", &RI),
        FieldDef::text(3, "Duration"),
        FieldDef::timestamp(4, "StartDateTime", TimeFormat::YmdHms),
        FieldDef::timestamp(5, "EndDateTime", TimeFormat::YmdHms),
        FieldDef::text(6, "Priority"),
        FieldDef::text(7, "Condition"),
        FieldDef::text(8, "Text"),
        FieldDef::text(9, "Conjunction"),
        FieldDef::composite(10, "OrderSequencing", &OSD),
        FieldDef::composite(11, "OccurrenceDuration", &CE),
        FieldDef::text(12, "TotalOccurrences"),
    ]),
};

pub static VID: DataTypeDef = DataTypeDef {
    id: "VID",
    name: "Version Identifier",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "VersionID"),
        FieldDef::composite(2, "InternationalizationCode", &CE),
        FieldDef::composite(3, "InternationalVersionID", &CE),
    ]),
};

pub static XAD: DataTypeDef = DataTypeDef {
    id: "XAD",
    name: "Extended Address",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "StreetAddress", &SAD),
        FieldDef::text(2, "OtherDesignation"),
        FieldDef::text(3, "City"),
        FieldDef::text(4, "StateOrProvince"),
        FieldDef::text(5, "ZipOrPostalCode"),
        FieldDef::text(6, "Country"),
        FieldDef::text(7, "AddressType"),
        FieldDef::text(8, "OtherGeographicDesignation"),
        FieldDef::text(9, "CountyParishCode"),
        FieldDef::text(10, "CensusTract"),
        FieldDef::text(11, "AddressRepresentationCode"),
        FieldDef::composite(12, "AddressValidityRange", &DR),
        FieldDef::timestamp(13, "EffectiveDate", TimeFormat::YmdHms),
        FieldDef::timestamp(14, "ExpirationDate", TimeFormat::YmdHms),
    ]),
};

pub static XCN: DataTypeDef = DataTypeDef {
    id: "XCN",
    name: "Extended Composite ID Number and Name for Persons",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "IDNumber"),
        FieldDef::composite(2, "FamilyName", &FN),
        FieldDef::text(3, "GivenName"),
        FieldDef::text(4, "SecondAndFurtherGivenNamesOrInitialsThereof"),
        FieldDef::text(5, "Suffix"),
        FieldDef::text(6, "Prefix"),
        FieldDef::text(7, "Degree"),
        FieldDef::text(8, "SourceTable"),
        FieldDef::composite(9, "AssigningAuthority", &HD),
        FieldDef::text(10, "NameTypeCode"),
        FieldDef::text(11, "IdentifierCheckDigit"),
        FieldDef::text(12, "CheckDigitScheme"),
        FieldDef::text(13, "IdentifierTypeCode"),
        FieldDef::composite(14, "AssigningFacility", &HD),
        FieldDef::text(15, "NameRepresentationCode"),
        FieldDef::composite(16, "NameContext", &CE),
        FieldDef::composite(17, "NameValidityRange", &DR),
        FieldDef::text(18, "NameAssemblyOrder"),
        FieldDef::timestamp(19, "EffectiveDate", TimeFormat::YmdHms),
        FieldDef::timestamp(20, "ExpirationDate", TimeFormat::YmdHms),
        FieldDef::text(21, "ProfessionalSuffix"),
        FieldDef::composite(22, "AssigningJurisdiction", &CWE),
        FieldDef::composite(23, "AssigningAgencyOrDepartment", &CWE),
    ]),
};

pub static XON: DataTypeDef = DataTypeDef {
    id: "XON",
    name: "Extended Composite Name and ID Number for Organizations",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "OrganizationName"),
        FieldDef::text(2, "OrganizationNameTypeCode"),
        FieldDef::text(3, "IDNumber"),
        FieldDef::text(4, "CheckDigit"),
        FieldDef::text(5, "CheckDigitScheme"),
        FieldDef::composite(6, "AssigningAuthority", &HD),
        FieldDef::text(7, "IdentifierTypeCode"),
        FieldDef::composite(8, "AssigningFacility", &HD),
        FieldDef::text(9, "NameRepresentationCode"),
        FieldDef::text(10, "OrganizationIdentifier"),
    ]),
};

pub static XPN: DataTypeDef = DataTypeDef {
    id: "XPN",
    name: "Extended Person Name",
    kind: DataTypeKind::Composite(&[
        FieldDef::composite(1, "FamilyName", &FN),
        FieldDef::text(2, "GivenName"),
        FieldDef::text(3, "SecondAndFurtherGivenNamesOrInitialsThereof"),
        FieldDef::text(4, "Suffix"),
        FieldDef::text(5, "Prefix"),
        FieldDef::text(6, "Degree"),
        FieldDef::text(7, "NameTypeCode"),
        FieldDef::text(8, "NameRepresentationCode"),
        FieldDef::composite(9, "NameContext", &CE),
        FieldDef::composite(10, "NameValidityRange", &DR),
        FieldDef::text(11, "NameAssemblyOrder"),
        FieldDef::timestamp(12, "EffectiveDate", TimeFormat::YmdHms),
        FieldDef::timestamp(13, "ExpirationDate", TimeFormat::YmdHms),
        FieldDef::text(14, "ProfessionalSuffix"),
    ]),
};

pub static XTN: DataTypeDef = DataTypeDef {
    id: "XTN",
    name: "Extended Telecommunication Number",
    kind: DataTypeKind::Composite(&[
        FieldDef::text(1, "TelephoneNumber"),
        FieldDef::text(2, "TelecommunicationUseCode"),
        FieldDef::text(3, "TelecommunicationEquipmentType"),
        FieldDef::text(4, "EmailAddress"),
        FieldDef::text(5, "CountryCode"),
        FieldDef::text(6, "AreaCityCode"),
        FieldDef::text(7, "LocalNumber"),
        FieldDef::text(8, "Extension"),
        FieldDef::text(9, "AnyText"),
        FieldDef::text(10, "ExtensionPrefix"),
        FieldDef::text(11, "SpeedDialCode"),
        FieldDef::text(12, "UnformattedTelephoneNumber"),
    ]),
};
