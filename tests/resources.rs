//! Tests for the mode table, the weight table and derived coefficients

use church_bell_dsp::coefficients::{CoefficientCache, ModeCoefficients};
use church_bell_dsp::mixer::Mixer;
use church_bell_dsp::resources::modes::{MODES, NUM_MODES};
use church_bell_dsp::resources::weights::*;
use church_bell_dsp::{SampleRate, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

#[test]
fn weights_in_range() {
    assert_eq!(WEIGHTS.len(), NUM_SLICES * SLICE_LENGTH);
    assert_eq!(WEIGHTS.len(), 350);
    assert!(WEIGHTS.iter().all(|weight| (0.0..=1.0).contains(weight)));
}

#[test]
fn weight_slices() {
    for position in 0..=MAX_STRIKE_POSITION {
        let start = position * SLICE_LENGTH;
        assert_eq!(weight_slice(position), &WEIGHTS[start..start + SLICE_LENGTH]);
    }

    assert_eq!(clamp_strike_position(5), MAX_STRIKE_POSITION);
    assert_eq!(weight_slice(100), weight_slice(MAX_STRIKE_POSITION));
}

#[test]
fn offsets_follow_frequency_order() {
    let mut seen = [false; NUM_MODES];
    for offset in WEIGHT_OFFSETS {
        assert!(offset < SLICE_LENGTH);
        assert!(!seen[offset]);
        seen[offset] = true;
    }

    let mut order: Vec<usize> = (0..NUM_MODES).collect();
    order.sort_by(|a, b| MODES[*a].frequency.total_cmp(&MODES[*b].frequency));
    for (rank, mode) in order.iter().enumerate() {
        assert_eq!(WEIGHT_OFFSETS[*mode], rank);
    }
}

#[test]
fn modes_are_physical() {
    for mode in MODES.iter() {
        assert!(mode.frequency > 0.0);
        assert!(mode.decay_rate > 0.0);
        assert!(mode.t60() > 0.0);
    }
}

#[test]
fn mixer_weights() {
    let mut mixer = Mixer::new();
    assert_eq!(mixer.strike_position(), 0);

    for position in 0..=MAX_STRIKE_POSITION {
        mixer.select(position);
        let slice = weight_slice(position);
        for (mode, weight) in mixer.weights().iter().enumerate() {
            assert_eq!(*weight, slice[WEIGHT_OFFSETS[mode]]);
        }
    }

    mixer.select(12);
    assert_eq!(mixer.strike_position(), MAX_STRIKE_POSITION);

    let bands = [1.0; NUM_MODES];
    let sum: f32 = mixer.weights().iter().sum();
    assert!((mixer.mix(&bands) - 0.02 * sum).abs() < 1e-5);
}

#[test]
fn pole_radius_stays_inside_unit_circle() {
    let mut sample_rates = vec![MIN_SAMPLE_RATE, MAX_SAMPLE_RATE];
    let mut sample_rate = MIN_SAMPLE_RATE;
    while sample_rate < MAX_SAMPLE_RATE {
        sample_rates.push(sample_rate);
        sample_rate *= 1.5;
    }

    for sample_rate in sample_rates {
        let sample_rate = SampleRate::new(sample_rate).unwrap();

        for mode in MODES.iter() {
            let coefficients = ModeCoefficients::new(mode, &sample_rate);
            assert!(coefficients.radius > 0.0, "{:?} at {:?}", mode, sample_rate);
            assert!(coefficients.radius < 1.0, "{:?} at {:?}", mode, sample_rate);
            assert!(coefficients.a1.is_finite());
            assert!(coefficients.a2.is_finite());
        }
    }
}

#[test]
fn coefficient_cache() {
    let mut cache = CoefficientCache::new(SampleRate::new(48000.0).unwrap());
    assert_eq!(cache.strike_cutoff(), 6500.0);
    assert!((cache.strike_lowpass().dc_gain() - 1.0).abs() < 1e-3);
    assert!(cache.dc_blocker().dc_gain().abs() < 1e-6);

    let before = *cache.strike_lowpass();
    cache.update_strike_cutoff(1000.0);
    assert_eq!(cache.strike_cutoff(), 1000.0);
    assert_ne!(*cache.strike_lowpass(), before);

    let modes_48k = *cache.modes();
    cache.set_sample_rate(SampleRate::new(96000.0).unwrap());
    assert_eq!(cache.sample_rate().sample_rate_hz, 96000.0);
    assert_eq!(cache.strike_cutoff(), 1000.0);
    for (at_48k, at_96k) in modes_48k.iter().zip(cache.modes().iter()) {
        assert!(at_96k.radius > at_48k.radius);
        assert!(at_96k.angle < at_48k.angle);
    }
}
