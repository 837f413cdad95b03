//! Payload instruments
//!
//! Instruments are polymorphic: the `@type` discriminator selects the basic
//! [`BasicInstrument`] (`Instrument`), an [`OpticalScanner`] or a
//! [`SyntheticApertureRadar`]. A document without `@type` is a basic instrument.

use entity::{Agency, Document, Entity, EntityType, TypeTag, lenient, one_or_many, type_of};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use units::Angle;

entity::enumeration! {
    /// How an instrument is attached to the spacecraft bus
    pub enum MountType as "mount type" {
        Body => "BODY",
        Mast => "MAST",
        Probe => "PROBE",
    }
}

entity::enumeration! {
    /// Image acquisition technique of an optical scanner
    pub enum ScanTechnique as "scan technique" {
        Pushbroom => "PUSHBROOM",
        Whiskbroom => "WHISKBROOM",
        MatrixImager => "MATRIX_IMAGER",
    }
}

/// Angular extent of a completed image.
///
/// In a document, a bare number is a conical field of view (full cone angle)
/// and a two-element list is `[crossTrack, alongTrack]`. Any other form must be
/// an object tagged `ConicalFieldOfView` or `RectangularFieldOfView`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type", from = "FieldOfViewDocument")]
pub enum FieldOfView {
    #[serde(rename = "ConicalFieldOfView", rename_all = "camelCase")]
    Conical { full_cone_angle: Angle },
    #[serde(rename = "RectangularFieldOfView", rename_all = "camelCase")]
    Rectangular {
        cross_track_field_of_view: Angle,
        along_track_field_of_view: Angle,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldOfViewDocument {
    ConeAngle(Angle),
    Pair([Angle; 2]),
    Tagged(TaggedFieldOfView),
}

#[derive(Deserialize)]
#[serde(tag = "@type")]
enum TaggedFieldOfView {
    #[serde(rename = "ConicalFieldOfView", rename_all = "camelCase")]
    Conical { full_cone_angle: Angle },
    #[serde(rename = "RectangularFieldOfView", rename_all = "camelCase")]
    Rectangular {
        cross_track_field_of_view: Angle,
        along_track_field_of_view: Angle,
    },
}

impl From<FieldOfViewDocument> for FieldOfView {
    fn from(doc: FieldOfViewDocument) -> Self {
        match doc {
            FieldOfViewDocument::ConeAngle(full_cone_angle) => FieldOfView::Conical { full_cone_angle },
            FieldOfViewDocument::Pair([cross_track, along_track]) => FieldOfView::Rectangular {
                cross_track_field_of_view: cross_track,
                along_track_field_of_view: along_track,
            },
            FieldOfViewDocument::Tagged(TaggedFieldOfView::Conical { full_cone_angle }) => {
                FieldOfView::Conical { full_cone_angle }
            }
            FieldOfViewDocument::Tagged(TaggedFieldOfView::Rectangular {
                cross_track_field_of_view,
                along_track_field_of_view,
            }) => FieldOfView::Rectangular {
                cross_track_field_of_view,
                along_track_field_of_view,
            },
        }
    }
}

fn default_tech_readiness_level() -> u8 {
    9
}

fn default_mount_type() -> Option<MountType> {
    Some(MountType::Body)
}

/// Properties shared by every instrument kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentProperties {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
    /// Total mass (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    /// Total volume (m³)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Nominal operating power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Wavelengths of the measured spectra (nm)
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub operating_wavelength: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_bit_depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_view: Option<FieldOfView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_pixels: Option<u32>,
    /// Data rate during nominal operations (Mbps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_rate: Option<f64>,
    /// Required solar conditions (e.g. `SUNLIT`, `ECLIPSE`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_conditions: Option<String>,
    #[serde(default = "default_tech_readiness_level")]
    pub tech_readiness_level: u8,
    #[serde(
        default = "default_mount_type",
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub mount_type: Option<MountType>,
}

impl Default for InstrumentProperties {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            acronym: None,
            agency: None,
            mass: None,
            volume: None,
            power: None,
            operating_wavelength: Vec::new(),
            pixel_bit_depth: None,
            field_of_view: None,
            number_pixels: None,
            data_rate: None,
            solar_conditions: None,
            tech_readiness_level: default_tech_readiness_level(),
            mount_type: default_mount_type(),
        }
    }
}

/// A general-purpose instrument with only the shared properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInstrument {
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<BasicInstrument>,
    #[serde(flatten)]
    pub properties: InstrumentProperties,
}

impl EntityType for BasicInstrument {
    const TYPE: &'static str = "Instrument";
}

/// A passive imager sweeping the ground track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpticalScanner {
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<OpticalScanner>,
    #[serde(flatten)]
    pub properties: InstrumentProperties,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub scan_technique: Option<ScanTechnique>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_detector_rows_along_track: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_detector_cols_cross_track: Option<u32>,
    /// Detector element width (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_width: Option<f64>,
    /// Focal length of the optics (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    /// Aperture diameter (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aperture_diameter: Option<f64>,
}

impl EntityType for OpticalScanner {
    const TYPE: &'static str = "OpticalScanner";
}

/// An active imaging radar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticApertureRadar {
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<SyntheticApertureRadar>,
    #[serde(flatten)]
    pub properties: InstrumentProperties,
    /// Pulse width (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse_width: Option<f64>,
    /// Antenna dimension along track (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_along_track_dim: Option<f64>,
    /// Antenna dimension cross track (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_cross_track_dim: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_aperture_efficiency: Option<f64>,
    /// Carrier frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_frequency: Option<f64>,
    /// Peak transmit power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_transmit_power: Option<f64>,
    /// Chirp bandwidth (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chirp_bandwidth: Option<f64>,
    /// Lowest usable pulse repetition frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_prf: Option<f64>,
    /// Highest usable pulse repetition frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_prf: Option<f64>,
    /// Combined radar losses (dB)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radar_losses: Option<f64>,
}

impl EntityType for SyntheticApertureRadar {
    const TYPE: &'static str = "SyntheticApertureRadar";
}

/// Any payload instrument.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Instrument {
    Basic(BasicInstrument),
    OpticalScanner(OpticalScanner),
    SyntheticApertureRadar(SyntheticApertureRadar),
}

type Constructor = fn(Document) -> serde_json::Result<Instrument>;

fn basic(doc: Document) -> serde_json::Result<Instrument> {
    serde_json::from_value(doc).map(Instrument::Basic)
}

fn optical_scanner(doc: Document) -> serde_json::Result<Instrument> {
    serde_json::from_value(doc).map(Instrument::OpticalScanner)
}

fn synthetic_aperture_radar(doc: Document) -> serde_json::Result<Instrument> {
    serde_json::from_value(doc).map(Instrument::SyntheticApertureRadar)
}

/// Instrument kinds by `@type` discriminator
const INSTRUMENT_KINDS: &[(&str, Constructor)] = &[
    (BasicInstrument::TYPE, basic),
    (OpticalScanner::TYPE, optical_scanner),
    (SyntheticApertureRadar::TYPE, synthetic_aperture_radar),
];

/// Discriminators of every registered instrument kind.
pub fn instrument_kinds() -> impl Iterator<Item = &'static str> {
    INSTRUMENT_KINDS.iter().map(|(tag, _)| *tag)
}

impl Instrument {
    /// Dispatches on `@type`. A missing or unknown tag reads as a basic instrument.
    pub fn from_document(doc: Document) -> serde_json::Result<Self> {
        let tag = type_of(&doc).unwrap_or(BasicInstrument::TYPE);
        let constructor = match INSTRUMENT_KINDS.iter().find(|(kind, _)| *kind == tag) {
            Some((_, constructor)) => *constructor,
            None => {
                warn!("unknown instrument type `{tag}`; reading as {}", BasicInstrument::TYPE);
                basic
            }
        };
        constructor(doc)
    }

    pub fn properties(&self) -> &InstrumentProperties {
        match self {
            Instrument::Basic(instrument) => &instrument.properties,
            Instrument::OpticalScanner(instrument) => &instrument.properties,
            Instrument::SyntheticApertureRadar(instrument) => &instrument.properties,
        }
    }
}

impl<'de> Deserialize<'de> for Instrument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Document::deserialize(deserializer)?;
        Instrument::from_document(doc).map_err(serde::de::Error::custom)
    }
}

impl From<BasicInstrument> for Instrument {
    fn from(instrument: BasicInstrument) -> Self {
        Instrument::Basic(instrument)
    }
}

impl From<OpticalScanner> for Instrument {
    fn from(instrument: OpticalScanner) -> Self {
        Instrument::OpticalScanner(instrument)
    }
}

impl From<SyntheticApertureRadar> for Instrument {
    fn from(instrument: SyntheticApertureRadar) -> Self {
        Instrument::SyntheticApertureRadar(instrument)
    }
}

impl EntityType for Instrument {
    const TYPE: &'static str = BasicInstrument::TYPE;
}

impl Entity for Instrument {
    fn id(&self) -> Option<&str> {
        self.properties().id.as_deref()
    }

    fn type_name(&self) -> &'static str {
        match self {
            Instrument::Basic(_) => BasicInstrument::TYPE,
            Instrument::OpticalScanner(_) => OpticalScanner::TYPE,
            Instrument::SyntheticApertureRadar(_) => SyntheticApertureRadar::TYPE,
        }
    }
}

entity::identity_eq!(Instrument);
