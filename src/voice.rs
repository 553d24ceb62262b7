//! Bell voice with parameter processing.
//!
//! A voice owns the whole signal chain of one bell:
//!
//! strike noise -> envelope -> modal bank -> weighted mix
//!
//! Parameters are read once per block in [`BellVoice::update_block_parameters`],
//! everything else runs per sample in [`BellVoice::render_sample`]. Nothing in
//! either path allocates, locks or logs.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

use crate::coefficients::CoefficientCache;
use crate::controls::Control;
use crate::envelope::{EnvelopePhase, StrikeEnvelope, StrikeWindow};
use crate::mixer::Mixer;
use crate::noise::strike_noise::StrikeNoise;
use crate::physical_modelling::modal_bank::ModalBank;
use crate::resources::modes::NUM_MODES;
use crate::{Error, SampleRate, NUM_OUTPUTS};

/// Patch parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Strike position in the range from `0` to `4`. Default is `0`.
    pub strike_position: usize,

    /// Cutoff of the strike noise in Hz, from `20.0` to `20000.0`. Default is `6500.0`.
    pub strike_cutoff: f32,

    /// Strike sharpness in the range from `0.01` to `5.0`. Default is `0.5`.
    /// Lower values give shorter, brighter strikes.
    pub strike_sharpness: f32,

    /// Output gain in the range from `0.0` to `1.0`. Default is `1.0`.
    pub gain: f32,

    /// Gate, `0.0` or `1.0`. Every rising edge strikes the bell. Default is `0.0`.
    pub gate: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            strike_position: Control::StrikePosition.descriptor().init as usize,
            strike_cutoff: Control::StrikeCutOff.descriptor().init,
            strike_sharpness: Control::StrikeSharpness.descriptor().init,
            gain: Control::Gain.descriptor().init,
            gate: Control::Gate.descriptor().init,
        }
    }
}

impl Parameters {
    /// Sets a control, clamped to its declared range.
    pub fn set(&mut self, control: Control, value: f32) {
        let value = control.descriptor().clamp(value);
        match control {
            Control::StrikePosition => self.strike_position = value as usize,
            Control::StrikeCutOff => self.strike_cutoff = value,
            Control::StrikeSharpness => self.strike_sharpness = value,
            Control::Gain => self.gain = value,
            Control::Gate => self.gate = value,
        }
    }

    pub fn get(&self, control: Control) -> f32 {
        match control {
            Control::StrikePosition => self.strike_position as f32,
            Control::StrikeCutOff => self.strike_cutoff,
            Control::StrikeSharpness => self.strike_sharpness,
            Control::Gain => self.gain,
            Control::Gate => self.gate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BellVoice {
    coefficients: CoefficientCache,

    strike_noise: StrikeNoise,
    envelope: StrikeEnvelope,
    modal_bank: ModalBank,
    mixer: Mixer,

    // Held for the duration of a block.
    gate: f32,
    gain: f32,
    window: StrikeWindow,
}

impl BellVoice {
    /// Creates a voice running at `sample_rate_hz`.
    pub fn new(sample_rate_hz: f32) -> Result<Self, Error> {
        let sample_rate = SampleRate::new(sample_rate_hz)?;
        let parameters = Parameters::default();

        let mut voice = Self {
            coefficients: CoefficientCache::new(sample_rate),
            strike_noise: StrikeNoise::new(),
            envelope: StrikeEnvelope::new(),
            modal_bank: ModalBank::new(),
            mixer: Mixer::new(),
            gate: 0.0,
            gain: 0.0,
            window: StrikeWindow::new(parameters.strike_sharpness, &sample_rate),
        };
        voice.reset();
        voice.update_block_parameters(&parameters);

        log::debug!(
            "Bell voice created at {} Hz",
            voice.coefficients.sample_rate().sample_rate_hz
        );

        Ok(voice)
    }

    /// Changes the sample rate and clears all runtime state.
    ///
    /// On error the voice is left untouched.
    pub fn init(&mut self, sample_rate_hz: f32) -> Result<(), Error> {
        let sample_rate = SampleRate::new(sample_rate_hz)?;

        self.coefficients.set_sample_rate(sample_rate);
        self.reset();
        self.update_block_parameters(&Parameters::default());

        log::debug!("Bell voice initialized at {} Hz", sample_rate.sample_rate_hz);

        Ok(())
    }

    /// Clears filter histories, envelope and noise source. Sample rate and
    /// coefficients are kept.
    pub fn reset(&mut self) {
        self.strike_noise.init();
        self.envelope.init();
        self.modal_bank.init();
    }

    /// Reads the block-rate parameters.
    #[inline]
    pub fn update_block_parameters(&mut self, parameters: &Parameters) {
        self.coefficients.update_strike_cutoff(parameters.strike_cutoff);
        self.mixer.select(parameters.strike_position);
        self.window = StrikeWindow::new(
            parameters.strike_sharpness,
            self.coefficients.sample_rate(),
        );
        self.gain = parameters.gain;
        self.gate = parameters.gate;
    }

    /// Renders one mono sample with the current block parameters.
    #[inline]
    pub fn render_sample(&mut self) -> f32 {
        let noise = self.strike_noise.next(&self.coefficients);
        let envelope = self.envelope.process(self.gate, &self.window);
        let excitation = self.gain * noise * envelope;

        let mut band_outputs = [0.0; NUM_MODES];
        self.modal_bank
            .process(excitation, self.coefficients.modes(), &mut band_outputs);

        self.mixer.mix(&band_outputs)
    }

    /// Renders `block_length` frames into both outputs.
    ///
    /// The block is shortened to the smaller of the two buffers. An empty
    /// block leaves the voice untouched.
    #[inline]
    pub fn process(
        &mut self,
        parameters: &Parameters,
        block_length: usize,
        outputs: [&mut [f32]; NUM_OUTPUTS],
    ) {
        let [left, right] = outputs;
        let frames = block_length.min(left.len()).min(right.len());
        if frames == 0 {
            return;
        }

        let left = &mut left[..frames];
        let right = &mut right[..frames];

        self.update_block_parameters(parameters);

        for (left_sample, right_sample) in left.iter_mut().zip(right.iter_mut()) {
            let sample = self.render_sample();
            *left_sample = sample;
            *right_sample = sample;
        }
    }

    /// Renders a mono block, one frame per output sample.
    #[inline]
    pub fn render(&mut self, parameters: &Parameters, out: &mut [f32]) {
        self.update_block_parameters(parameters);

        for out_sample in out.iter_mut() {
            *out_sample = self.render_sample();
        }
    }

    /// Effective sample rate in Hz, after clamping.
    #[inline]
    pub fn sample_rate(&self) -> f32 {
        self.coefficients.sample_rate().sample_rate_hz
    }

    #[inline]
    pub fn coefficients(&self) -> &CoefficientCache {
        &self.coefficients
    }

    #[inline]
    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    #[inline]
    pub fn modal_bank(&self) -> &ModalBank {
        &self.modal_bank
    }

    #[inline]
    pub fn strike_window(&self) -> &StrikeWindow {
        &self.window
    }

    #[inline]
    pub fn envelope_phase(&self) -> EnvelopePhase {
        self.envelope.phase(&self.window)
    }

    /// Envelope value of the last rendered sample.
    #[inline]
    pub fn envelope_value(&self) -> f32 {
        self.envelope.value()
    }
}
