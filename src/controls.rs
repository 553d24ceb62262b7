//! Control surface and metadata of the bell.
//!
//! Hosts build their parameter widgets from [`CONTROLS`], in declaration
//! order, and write values through [`crate::Parameters::set`].

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

/// Widget type of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    NumEntry,
    HorizontalSlider,
    /// Momentary trigger, 1.0 while pressed.
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlDescriptor {
    pub label: &'static str,
    pub kind: ControlKind,
    pub init: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub unit: Option<&'static str>,
}

impl ControlDescriptor {
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.init
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    StrikePosition,
    StrikeCutOff,
    StrikeSharpness,
    Gain,
    Gate,
}

impl Control {
    /// All controls in declaration order.
    pub const ALL: [Control; 5] = [
        Control::StrikePosition,
        Control::StrikeCutOff,
        Control::StrikeSharpness,
        Control::Gain,
        Control::Gate,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn descriptor(self) -> &'static ControlDescriptor {
        &CONTROLS[self.index()]
    }

    /// Looks up a control by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|control| control.descriptor().label == label)
    }
}

pub const CONTROLS: [ControlDescriptor; 5] = [
    ControlDescriptor {
        label: "strikePosition",
        kind: ControlKind::NumEntry,
        init: 0.0,
        min: 0.0,
        max: 4.0,
        step: 1.0,
        unit: None,
    },
    ControlDescriptor {
        label: "strikeCutOff",
        kind: ControlKind::HorizontalSlider,
        init: 6500.0,
        min: 20.0,
        max: 20000.0,
        step: 1.0,
        unit: Some("Hz"),
    },
    ControlDescriptor {
        label: "strikeSharpness",
        kind: ControlKind::HorizontalSlider,
        init: 0.5,
        min: 0.01,
        max: 5.0,
        step: 0.01,
        unit: None,
    },
    ControlDescriptor {
        label: "gain",
        kind: ControlKind::HorizontalSlider,
        init: 1.0,
        min: 0.0,
        max: 1.0,
        step: 0.01,
        unit: None,
    },
    ControlDescriptor {
        label: "gate",
        kind: ControlKind::Button,
        init: 0.0,
        min: 0.0,
        max: 1.0,
        step: 1.0,
        unit: None,
    },
];

/// Name of the model.
pub const NAME: &str = "StandardChurchBell";

/// Key/value metadata describing the model.
pub const METADATA: [(&str, &str); 5] = [
    ("name", NAME),
    ("description", "Standard church bell physical model."),
    (
        "copyright",
        "(c)Romain Michon, CCRMA (Stanford University), GRAME",
    ),
    ("license", "MIT"),
    ("filename", "standardBell.dsp"),
];

/// Looks up a metadata value.
pub fn metadata(key: &str) -> Option<&'static str> {
    METADATA
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}
