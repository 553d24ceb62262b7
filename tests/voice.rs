//! Tests for the bell voice


use church_bell_dsp::controls::Control;
use church_bell_dsp::envelope::EnvelopePhase;
use church_bell_dsp::{BellVoice, Error, Parameters, NUM_OUTPUTS};

const BLOCK_SIZE: usize = 32;

/// Renders `duration` seconds, with the gate raised for the first block only.
fn render_strike(voice: &mut BellVoice, parameters: &Parameters, duration: f32) -> Vec<f32> {
    let blocks = (duration * voice.sample_rate() / (BLOCK_SIZE as f32)) as usize;
    let mut parameters = *parameters;
    let mut out = [0.0; BLOCK_SIZE];
    let mut data = Vec::new();

    for n in 0..blocks {
        parameters.gate = if n == 0 { 1.0 } else { 0.0 };
        voice.render(&parameters, &mut out);
        data.extend_from_slice(&out);
    }

    data
}

fn rms(samples: &[f32]) -> f32 {
    let sum: f32 = samples.iter().map(|sample| sample * sample).sum();
    (sum / samples.len() as f32).sqrt()
}

#[test]
fn strike_decays() {
    let sample_rate = 44100.0;
    let mut voice = BellVoice::new(sample_rate).unwrap();
    let data = render_strike(&mut voice, &Parameters::default(), 2.0);

    wav_writer::write("voice/strike.wav", sample_rate, &data).ok();

    assert!(data.iter().all(|sample| sample.is_finite()));

    let peak = data.iter().fold(0.0f32, |peak, sample| peak.max(sample.abs()));
    assert!(peak > 0.0);
    assert!(peak < 4.0);

    let quarter = data.len() / 4;
    let levels: Vec<f32> = data.chunks(quarter).take(4).map(rms).collect();
    for pair in levels.windows(2) {
        assert!(pair[1] < pair[0], "levels not decreasing: {:?}", levels);
    }
}

#[test]
fn strike_at_48k() {
    let sample_rate = 48000.0;
    let mut voice = BellVoice::new(sample_rate).unwrap();
    let mut parameters = Parameters::default();
    let mut envelope = Vec::new();
    let mut data = Vec::new();

    parameters.gate = 1.0;
    for n in 0..48000 {
        if n == 1 {
            parameters.gate = 0.0;
        }
        voice.update_block_parameters(&parameters);
        data.push(voice.render_sample());
        envelope.push(voice.envelope_value());
    }

    wav_writer::write("voice/strike_48k.wav", sample_rate, &data).ok();

    assert_eq!(data[0], 0.0);

    let (peak_index, peak) = envelope
        .iter()
        .enumerate()
        .fold((0, 0.0f32), |(index, peak), (n, value)| {
            if *value > peak {
                (n, *value)
            } else {
                (index, peak)
            }
        });
    assert_eq!(peak_index, 48);
    assert!((peak - 1.0).abs() < 1e-6);
    assert!(envelope[96] < 1e-5);
    assert!(envelope[97..].iter().all(|value| *value == 0.0));

    let half = data.len() / 2;
    assert!(rms(&data[..half]) > rms(&data[half..]));
}

#[test]
fn zero_gain_is_silent() {
    let mut voice = BellVoice::new(48000.0).unwrap();
    let mut parameters = Parameters::default();
    parameters.gain = 0.0;

    let data = render_strike(&mut voice, &parameters, 0.5);

    assert!(data.iter().all(|sample| *sample == 0.0));
    assert!(voice.modal_bank().is_silent());
}

#[test]
fn silent_without_gate() {
    let mut voice = BellVoice::new(48000.0).unwrap();
    let parameters = Parameters::default();
    let mut out = [0.0; BLOCK_SIZE];

    for _ in 0..1000 {
        voice.render(&parameters, &mut out);
        assert!(out.iter().all(|sample| *sample == 0.0));
    }

    assert_eq!(voice.envelope_phase(), EnvelopePhase::Idle);
}

#[test]
fn voices_are_deterministic() {
    let mut parameters = Parameters::default();
    parameters.strike_position = 2;
    parameters.strike_cutoff = 3000.0;

    let mut voice_1 = BellVoice::new(48000.0).unwrap();
    let mut voice_2 = BellVoice::new(48000.0).unwrap();

    let data_1 = render_strike(&mut voice_1, &parameters, 0.5);
    let data_2 = render_strike(&mut voice_2, &parameters, 0.5);

    assert_eq!(data_1, data_2);
}

#[test]
fn outputs_are_identical() {
    let mut voice = BellVoice::new(48000.0).unwrap();
    let mut parameters = Parameters::default();
    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];

    for n in 0..100 {
        parameters.gate = if n == 0 { 1.0 } else { 0.0 };
        voice.process(&parameters, BLOCK_SIZE, [&mut left, &mut right]);
        assert_eq!(left, right);
    }

    assert!(left.iter().any(|sample| *sample != 0.0));
    assert_eq!(NUM_OUTPUTS, 2);
}

#[test]
fn reset_restores_fresh_state() {
    let parameters = Parameters::default();

    let mut voice = BellVoice::new(48000.0).unwrap();
    render_strike(&mut voice, &parameters, 0.25);
    voice.reset();
    let data_reset = render_strike(&mut voice, &parameters, 0.25);

    let mut fresh = BellVoice::new(48000.0).unwrap();
    let data_fresh = render_strike(&mut fresh, &parameters, 0.25);

    assert_eq!(data_reset, data_fresh);
}

#[test]
fn init_changes_sample_rate() {
    let parameters = Parameters::default();

    let mut voice = BellVoice::new(44100.0).unwrap();
    render_strike(&mut voice, &parameters, 0.25);
    voice.init(48000.0).unwrap();
    assert_eq!(voice.sample_rate(), 48000.0);
    let data_init = render_strike(&mut voice, &parameters, 0.25);

    let mut fresh = BellVoice::new(48000.0).unwrap();
    let data_fresh = render_strike(&mut fresh, &parameters, 0.25);

    assert_eq!(data_init, data_fresh);
}

#[test]
fn invalid_sample_rates() {
    for sample_rate in [0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert!(matches!(
            BellVoice::new(sample_rate),
            Err(Error::InvalidSampleRate(_))
        ));
    }

    let mut voice = BellVoice::new(48000.0).unwrap();
    assert!(voice.init(f32::NAN).is_err());
    assert!(voice.init(0.0).is_err());
    assert_eq!(voice.sample_rate(), 48000.0);
}

#[test]
fn sample_rate_is_clamped() {
    let voice = BellVoice::new(0.5).unwrap();
    assert_eq!(voice.sample_rate(), 1.0);

    let voice = BellVoice::new(384000.0).unwrap();
    assert_eq!(voice.sample_rate(), 192000.0);

    let mut parameters = Parameters::default();
    let mut out = [0.0; BLOCK_SIZE];

    for sample_rate in [1.0, 8000.0, 192000.0] {
        let mut voice = BellVoice::new(sample_rate).unwrap();
        for n in 0..64 {
            parameters.gate = if n == 0 { 1.0 } else { 0.0 };
            voice.render(&parameters, &mut out);
            assert!(out.iter().all(|sample| sample.is_finite()));
        }
    }
}

#[test]
fn empty_block() {
    let mut voice = BellVoice::new(48000.0).unwrap();
    let mut parameters = Parameters::default();
    parameters.gate = 1.0;

    let mut left = [7.0; BLOCK_SIZE];
    let mut right = [7.0; BLOCK_SIZE];
    voice.process(&parameters, 0, [&mut left, &mut right]);

    assert!(left.iter().all(|sample| *sample == 7.0));
    assert!(right.iter().all(|sample| *sample == 7.0));
    assert!(voice.modal_bank().is_silent());
}

#[test]
fn oversized_block_is_clipped() {
    let mut parameters = Parameters::default();
    parameters.gate = 1.0;

    let mut voice = BellVoice::new(48000.0).unwrap();
    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];
    voice.process(&parameters, 4 * BLOCK_SIZE, [&mut left, &mut right]);

    let mut reference = BellVoice::new(48000.0).unwrap();
    let mut out = [0.0; BLOCK_SIZE];
    reference.render(&parameters, &mut out);

    assert_eq!(left, out);
    assert_eq!(right, out);
}

#[test]
fn render_matches_process() {
    let mut voice_1 = BellVoice::new(48000.0).unwrap();
    let mut voice_2 = BellVoice::new(48000.0).unwrap();
    let mut parameters = Parameters::default();
    let mut out = [0.0; BLOCK_SIZE];
    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];

    for n in 0..50 {
        parameters.gate = if n == 0 { 1.0 } else { 0.0 };
        voice_1.render(&parameters, &mut out);
        voice_2.process(&parameters, BLOCK_SIZE, [&mut left, &mut right]);
        assert_eq!(out, left);
    }
}

#[test]
fn strike_position_is_clamped() {
    let mut parameters = Parameters::default();
    parameters.strike_position = 9;

    let mut voice = BellVoice::new(48000.0).unwrap();
    let data = render_strike(&mut voice, &parameters, 0.25);
    assert_eq!(voice.mixer().strike_position(), 4);

    parameters.strike_position = 4;
    let mut reference = BellVoice::new(48000.0).unwrap();
    let reference_data = render_strike(&mut reference, &parameters, 0.25);

    assert_eq!(data, reference_data);
}

#[test]
fn strike_positions() {
    let sample_rate = 48000.0;
    let mut parameters = Parameters::default();
    let mut renders = Vec::new();

    for position in 0..=4 {
        parameters.set(Control::StrikePosition, position as f32);

        let mut voice = BellVoice::new(sample_rate).unwrap();
        let data = render_strike(&mut voice, &parameters, 1.0);

        wav_writer::write(
            format!("voice/strike_position_{}.wav", position),
            sample_rate,
            &data,
        )
        .ok();

        renders.push(data);
    }

    for a in 0..renders.len() {
        for b in (a + 1)..renders.len() {
            assert_ne!(renders[a], renders[b]);
        }
    }
}

#[test]
fn sharpness_and_cutoff() {
    let sample_rate = 48000.0;

    for (sharpness, cutoff) in [(0.01, 20.0), (0.5, 6500.0), (5.0, 20000.0)] {
        let mut parameters = Parameters::default();
        parameters.set(Control::StrikeSharpness, sharpness);
        parameters.set(Control::StrikeCutOff, cutoff);

        let mut voice = BellVoice::new(sample_rate).unwrap();
        let data = render_strike(&mut voice, &parameters, 0.5);

        wav_writer::write(
            format!("voice/sharpness_{}_cutoff_{}.wav", sharpness, cutoff),
            sample_rate,
            &data,
        )
        .ok();

        assert!(data.iter().all(|sample| sample.is_finite()));
        assert!(data.iter().any(|sample| *sample != 0.0));
    }
}

#[test]
fn retrigger() {
    let mut voice = BellVoice::new(48000.0).unwrap();
    let mut parameters = Parameters::default();
    let mut out = [0.0; BLOCK_SIZE];

    parameters.gate = 1.0;
    voice.render(&parameters, &mut out);
    assert_eq!(voice.envelope_phase(), EnvelopePhase::Rising);

    // Held gate does not strike again.
    for _ in 0..10 {
        voice.render(&parameters, &mut out);
    }
    assert_eq!(voice.envelope_phase(), EnvelopePhase::Idle);
    assert_eq!(voice.envelope_value(), 0.0);

    parameters.gate = 0.0;
    voice.render(&parameters, &mut out);
    assert_eq!(voice.envelope_phase(), EnvelopePhase::Idle);

    parameters.gate = 1.0;
    voice.render(&parameters, &mut out);
    assert_eq!(voice.envelope_phase(), EnvelopePhase::Rising);
    assert!(voice.envelope_value() > 0.0);
}
