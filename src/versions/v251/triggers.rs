//! Trigger structure tables for HL7 v2.5.1

use crate::registry::{Cardinality, ChildDef, GroupDef, TriggerDef};

use super::segments as seg;

/// Look up a trigger structure by identifier.
pub fn lookup(id: &str) -> Option<&'static TriggerDef> {
    match id {
        "ACK" => Some(&ACK),
        "ORL_O34" => Some(&ORL_O34),
        "ORU_R01" => Some(&ORU_R01),
        "SIU_S12" => Some(&SIU_S12),
        _ => None,
    }
}

pub static ACK: TriggerDef = TriggerDef {
    id: "ACK",
    root: GroupDef {
        name: "ACK",
        children: &[
            ChildDef::segment(Cardinality::Required, &seg::MSH),
            ChildDef::segment(Cardinality::Repeating, &seg::SFT),
            ChildDef::segment(Cardinality::Required, &seg::MSA),
            ChildDef::segment(Cardinality::Repeating, &seg::ERR),
        ],
    },
};

static ORU_R01_VISIT: GroupDef = GroupDef {
    name: "VISIT",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::PV1),
        ChildDef::segment(Cardinality::Optional, &seg::PV2),
    ],
};

static ORU_R01_PATIENT: GroupDef = GroupDef {
    name: "PATIENT",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::PID),
        ChildDef::segment(Cardinality::Optional, &seg::PD1),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
        ChildDef::segment(Cardinality::Repeating, &seg::NK1),
        ChildDef::group(Cardinality::Optional, &ORU_R01_VISIT),
    ],
};

static ORU_R01_TIMING_QTY: GroupDef = GroupDef {
    name: "TIMING_QTY",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::TQ1),
        ChildDef::segment(Cardinality::Repeating, &seg::TQ2),
    ],
};

static ORU_R01_OBSERVATION: GroupDef = GroupDef {
    name: "OBSERVATION",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::OBX),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
    ],
};

static ORU_R01_SPECIMEN: GroupDef = GroupDef {
    name: "SPECIMEN",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::SPM),
        ChildDef::segment(Cardinality::Repeating, &seg::OBX),
    ],
};

static ORU_R01_ORDER_OBSERVATION: GroupDef = GroupDef {
    name: "ORDER_OBSERVATION",
    children: &[
        ChildDef::segment(Cardinality::Optional, &seg::ORC),
        ChildDef::segment(Cardinality::Required, &seg::OBR),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
        ChildDef::group(Cardinality::Repeating, &ORU_R01_TIMING_QTY),
        ChildDef::segment(Cardinality::Optional, &seg::CTD),
        ChildDef::group(Cardinality::Repeating, &ORU_R01_OBSERVATION),
        ChildDef::segment(Cardinality::Repeating, &seg::FT1),
        ChildDef::segment(Cardinality::Repeating, &seg::CTI),
        ChildDef::group(Cardinality::Repeating, &ORU_R01_SPECIMEN),
    ],
};

static ORU_R01_PATIENT_RESULT: GroupDef = GroupDef {
    name: "PATIENT_RESULT",
    children: &[
        ChildDef::group(Cardinality::Optional, &ORU_R01_PATIENT),
        ChildDef::group(Cardinality::Repeating, &ORU_R01_ORDER_OBSERVATION),
    ],
};

pub static ORU_R01: TriggerDef = TriggerDef {
    id: "ORU_R01",
    root: GroupDef {
        name: "ORU_R01",
        children: &[
            ChildDef::segment(Cardinality::Required, &seg::MSH),
            ChildDef::segment(Cardinality::Repeating, &seg::SFT),
            ChildDef::group(Cardinality::Repeating, &ORU_R01_PATIENT_RESULT),
            ChildDef::segment(Cardinality::Optional, &seg::DSC),
        ],
    },
};

static ORL_O34_TIMING: GroupDef = GroupDef {
    name: "TIMING",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::TQ1),
        ChildDef::segment(Cardinality::Repeating, &seg::TQ2),
    ],
};

static ORL_O34_OBSERVATION_REQUEST: GroupDef = GroupDef {
    name: "OBSERVATION_REQUEST",
    children: &[ChildDef::segment(Cardinality::Required, &seg::OBR)],
};

static ORL_O34_ORDER: GroupDef = GroupDef {
    name: "ORDER",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::ORC),
        ChildDef::group(Cardinality::Repeating, &ORL_O34_TIMING),
        ChildDef::group(Cardinality::Optional, &ORL_O34_OBSERVATION_REQUEST),
    ],
};

static ORL_O34_SPECIMEN: GroupDef = GroupDef {
    name: "SPECIMEN",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::SPM),
        ChildDef::segment(Cardinality::Repeating, &seg::SAC),
        ChildDef::group(Cardinality::Repeating, &ORL_O34_ORDER),
    ],
};

static ORL_O34_PATIENT: GroupDef = GroupDef {
    name: "PATIENT",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::PID),
        ChildDef::group(Cardinality::Repeating, &ORL_O34_SPECIMEN),
    ],
};

static ORL_O34_RESPONSE: GroupDef = GroupDef {
    name: "RESPONSE",
    children: &[ChildDef::group(Cardinality::Optional, &ORL_O34_PATIENT)],
};

pub static ORL_O34: TriggerDef = TriggerDef {
    id: "ORL_O34",
    root: GroupDef {
        name: "ORL_O34",
        children: &[
            ChildDef::segment(Cardinality::Required, &seg::MSH),
            ChildDef::segment(Cardinality::Required, &seg::MSA),
            ChildDef::segment(Cardinality::Optional, &seg::ERR),
            ChildDef::segment(Cardinality::Repeating, &seg::SFT),
            ChildDef::segment(Cardinality::Repeating, &seg::NTE),
            ChildDef::group(Cardinality::Optional, &ORL_O34_RESPONSE),
        ],
    },
};

static SIU_S12_PATIENT: GroupDef = GroupDef {
    name: "PATIENT",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::PID),
        ChildDef::segment(Cardinality::Optional, &seg::PD1),
        ChildDef::segment(Cardinality::Optional, &seg::PV1),
        ChildDef::segment(Cardinality::Optional, &seg::PV2),
        ChildDef::segment(Cardinality::Repeating, &seg::OBX),
        ChildDef::segment(Cardinality::Repeating, &seg::DG1),
    ],
};

static SIU_S12_SERVICE: GroupDef = GroupDef {
    name: "SERVICE",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::AIS),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
    ],
};

static SIU_S12_GENERAL_RESOURCE: GroupDef = GroupDef {
    name: "GENERAL_RESOURCE",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::AIG),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
    ],
};

static SIU_S12_LOCATION_RESOURCE: GroupDef = GroupDef {
    name: "LOCATION_RESOURCE",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::AIL),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
    ],
};

static SIU_S12_PERSONNEL_RESOURCE: GroupDef = GroupDef {
    name: "PERSONNEL_RESOURCE",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::AIP),
        ChildDef::segment(Cardinality::Repeating, &seg::NTE),
    ],
};

static SIU_S12_RESOURCES: GroupDef = GroupDef {
    name: "RESOURCES",
    children: &[
        ChildDef::segment(Cardinality::Required, &seg::RGS),
        ChildDef::group(Cardinality::Repeating, &SIU_S12_SERVICE),
        ChildDef::group(Cardinality::Repeating, &SIU_S12_GENERAL_RESOURCE),
        ChildDef::group(Cardinality::Repeating, &SIU_S12_LOCATION_RESOURCE),
        ChildDef::group(Cardinality::Repeating, &SIU_S12_PERSONNEL_RESOURCE),
    ],
};

pub static SIU_S12: TriggerDef = TriggerDef {
    id: "SIU_S12",
    root: GroupDef {
        name: "SIU_S12",
        children: &[
            ChildDef::segment(Cardinality::Required, &seg::MSH),
            ChildDef::segment(Cardinality::Required, &seg::SCH),
            ChildDef::segment(Cardinality::Repeating, &seg::NTE),
            ChildDef::group(Cardinality::Repeating, &SIU_S12_PATIENT),
            ChildDef::group(Cardinality::Repeating, &SIU_S12_RESOURCES),
        ],
    },
};
