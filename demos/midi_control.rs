//! Bell voice with MIDI parameter control.
//!
//! Any note on strikes the bell, with the velocity as gain. CC 21 to 24 map to
//! strike position, cutoff, sharpness and volume.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use church_bell_dsp::controls::Control;
use church_bell_dsp::{BellVoice, Parameters};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    voice: BellVoice,
    parameters: Parameters,
    volume: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            voice: BellVoice::new(SAMPLE_RATE as f32).unwrap(),
            parameters: Parameters::default(),
            volume: 1.0,
        }
    }

    /// Maps a 7-bit controller value onto the range of a control.
    fn set_from_cc(&mut self, control: Control, value: u8) {
        let descriptor = control.descriptor();
        let value = descriptor.min + (descriptor.max - descriptor.min) * value as f32 / 127.0;
        self.parameters.set(control, value);
        log::info!("{}: {}", descriptor.label, self.parameters.get(control));
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.parameters = Parameters::default();
        self.voice.reset();
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let block_length = samples_left.len();

        self.voice.process(
            &self.parameters,
            block_length,
            [&mut *samples_left, &mut *samples_right],
        );

        for sample in samples_left.iter_mut().chain(samples_right.iter_mut()) {
            *sample *= self.volume;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.parameters.set(Control::Gate, 0.0);
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                self.parameters.set(Control::Gate, 1.0);
                self.parameters.set(Control::Gain, message[2] as f32 / 127.0);
                log::info!("Note on: {}", message[1]);
            }
            0x90 => {
                // Note on with zero velocity
                self.parameters.set(Control::Gate, 0.0);
            }
            0xB0 => {
                // Control change
                match message[1] {
                    21 => self.set_from_cc(Control::StrikePosition, message[2]),
                    22 => self.set_from_cc(Control::StrikeCutOff, message[2]),
                    23 => self.set_from_cc(Control::StrikeSharpness, message[2]),
                    24 => {
                        self.volume = message[2] as f32 / 127.0;
                        log::info!("Volume: {}", self.volume);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
