// Values used when a key is absent from the configuration file.

pub const DEFAULT_CONFIGS: &[(&str, &str)] = &[
    ("jet_btag_wkpt", "M"),
    ("NEvents", "-1"),
    ("firstEvent", "0"),
    ("selection", "none"),
    ("output_path", "./"),
    ("customDirectory", ""),
    ("cutsfile", "config/cuts_none.txt"),
    ("verboseLevel", "INFO"),
    (
        "ejetsTriggers",
        "HLT_Ele45_CaloIdVT_GsfTrkIdT_PFJet200_PFJet50,HLT_Ele50_CaloIdVT_GsfTrkIdT_PFJet165,HLT_Ele115_CaloIdVT_GsfTrkIdT",
    ),
    ("mujetsTriggers", "HLT_Mu50,HLT_TkMu50"),
];

/// Primary datasets of simulated samples; anything else is collision data.
pub const MC_PRIMARY_DATASETS: &[&str] = &[
    "TT_TuneCUETP8M2T4_13TeV-powheg-pythia8",
    "TT_TuneCUETP8M2T4_13TeV-powheg-pythia8-ext",
    "TT_TuneCUETP8M1_13TeV-powheg-pythia8",
];

pub const VERBOSE_LEVELS: &[&str] = &["DEBUG", "INFO", "WARNING", "ERROR"];
