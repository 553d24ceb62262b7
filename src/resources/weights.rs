//! Excitation weights of the modes, one slice per strike position.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

#![allow(clippy::excessive_precision)]

use super::modes::NUM_MODES;

/// Number of weights in a slice, one per mode.
pub const SLICE_LENGTH: usize = NUM_MODES;

/// Number of slices stored in the table.
pub const NUM_SLICES: usize = 7;

/// Highest strike position selectable from the control surface. The two
/// trailing slices are stored but never addressed.
pub const MAX_STRIKE_POSITION: usize = 4;

/// Offset of each mode's weight within a slice, indexed like
/// [`super::modes::MODES`].
pub const WEIGHT_OFFSETS: [usize; NUM_MODES] = [
    47, 46, 45, 44, 43, 42, 41, 40, 36, 35,
    31, 30, 29, 28, 27, 5, 4, 3, 2, 1,
    0, 23, 22, 21, 20, 19, 18, 17, 16, 15,
    14, 13, 12, 11, 10, 9, 8, 7, 6, 24,
    25, 32, 26, 33, 34, 37, 38, 39, 48, 49,
];

pub const WEIGHTS: [f32; NUM_SLICES * SLICE_LENGTH] = [
    // Slice 0
    0.691910982, 0.62233299, 0.54865098, 0.46330601, 0.82694602,
    0.74951297, 0.224199995, 0.642678022, 0.760442019, 0.326054007,
    0.276463002, 0.359344006, 0.182579994, 0.686765015, 0.457159013,
    0.839015007, 0.845337987, 0.372377008, 0.306416988, 0.147380993,
    0.359706998, 0.653536975, 0.27553001, 0.401232988, 0.435416996,
    0.251480997, 0.190062001, 0.773371994, 0.315014005, 0.228811994,
    0.521511972, 0.411541998, 0.720762014, 1.0, 0.286502004,
    0.338937998, 0.119994998, 0.432289004, 0.409676999, 0.156271994,
    0.298871011, 0.250786006, 0.640775979, 0.209430993, 0.17001,
    0.390013993, 0.301697999, 0.799413025, 0.980580986, 0.38499999,
    // Slice 1
    0.82543999, 0.818894029, 0.349615991, 0.235395998, 0.783164024,
    0.821914017, 0.28411001, 0.43028599, 0.507670999, 0.32625401,
    0.260488003, 0.273364007, 0.205180004, 0.714851975, 0.479950011,
    0.803637028, 0.683942974, 0.355370998, 0.406924009, 0.656256974,
    0.423025012, 0.413515002, 0.38635999, 0.384786993, 0.389447987,
    0.813367009, 0.234988004, 1.0, 0.311268002, 0.350244999,
    0.403856009, 0.646143019, 0.500485003, 0.833553016, 0.431768,
    0.467063993, 0.298979014, 0.487412989, 0.514907002, 0.369383007,
    0.106197, 0.494224012, 0.816079021, 0.535807014, 0.379873008,
    0.380201012, 0.606306016, 0.516116977, 0.748449028, 0.556948006,
    // Slice 2
    0.587065995, 0.584423006, 0.39486599, 0.341120988, 0.433458,
    0.455987006, 0.361236989, 0.429390013, 0.122969002, 0.133175001,
    0.505176008, 0.513984978, 0.0554618984, 0.604942024, 0.372074008,
    0.381125987, 0.314354002, 0.499635994, 0.518710971, 0.923792005,
    0.259543985, 0.576516986, 0.553915024, 0.585443974, 0.245369002,
    1.0, 0.117757, 0.977317989, 0.652862012, 0.509314001,
    0.148550004, 0.506402016, 0.180059001, 0.356005013, 0.386810005,
    0.279354006, 0.205791995, 0.551055014, 0.689107001, 0.44572401,
    0.30685699, 0.324746996, 0.603621006, 0.394466013, 0.288612992,
    0.264696985, 0.60611999, 0.202739999, 0.267271012, 0.925656021,
    // Slice 3
    0.439227998, 0.425884008, 0.626632988, 0.547204018, 0.230021998,
    0.225654006, 0.392697006, 0.493474007, 0.149857, 0.0604047999,
    0.693889022, 0.740270972, 0.175485, 0.704998016, 0.329732001,
    0.153026, 0.125744, 0.286994994, 0.278878003, 0.812372029,
    0.0562173985, 0.241478994, 0.294524997, 0.358833998, 0.171047002,
    0.847603977, 0.172279999, 0.975210011, 0.892072976, 0.613987029,
    0.0659212992, 0.301582992, 0.0610846989, 0.125438005, 0.145151004,
    0.180086002, 0.124231003, 0.260161012, 0.337572992, 0.203742996,
    0.655798018, 0.425893009, 0.902347028, 0.50068599, 0.311172992,
    0.215561002, 0.349590987, 0.0854218006, 0.0805061981, 1.0,
    // Slice 4
    0.338652015, 0.295396, 0.698314011, 0.664972007, 0.118983001,
    0.0881905034, 0.311580002, 0.391135991, 0.151914999, 0.239503995,
    0.685742021, 0.884332001, 0.288516015, 0.768688023, 0.274850994,
    0.0490311012, 0.0357864983, 0.293303013, 0.249460995, 0.493770987,
    0.340983987, 0.467622995, 0.216630995, 0.255234987, 0.0988695025,
    0.461979985, 0.147247002, 0.640196025, 1.0, 0.551937997,
    0.0453732014, 0.189906999, 0.0197541993, 0.0309216995, 0.769837022,
    0.360417992, 0.384041011, 0.867434025, 0.398948014, 0.171847999,
    0.748651981, 0.301957011, 0.860611022, 0.958674014, 0.549030006,
    0.272753, 0.372752994, 0.0180728007, 0.0292352997, 0.850199997,
    // Slice 5
    0.224583, 0.214805007, 0.670319021, 0.586432993, 0.0435141996,
    0.0388574004, 0.144811004, 0.157060996, 0.155569002, 0.418334007,
    0.673655987, 0.749572992, 0.337354004, 0.747254014, 0.255997002,
    0.0239656009, 0.0310718995, 0.721086979, 0.700616002, 0.199050993,
    0.511843979, 0.84948498, 0.700681984, 0.778657973, 0.171288997,
    0.261972994, 0.129227996, 0.328597009, 0.781821012, 0.583813012,
    0.080671303, 0.416875988, 0.0118201999, 0.00868562981, 1.0,
    0.461883992, 0.186882004, 0.641363978, 0.994705021, 0.501901984,
    0.566448987, 0.0678844973, 0.139736995, 0.462581992, 0.318655998,
    0.233946994, 0.495941013, 0.0314028002, 0.0146477995, 0.704320014,
    // Slice 6
    0.124953002, 0.132549003, 0.457125992, 0.378636003, 0.0169361997,
    0.0195493996, 0.204154998, 0.29440099, 0.271367013, 0.730857015,
    0.459322006, 0.433077991, 0.325170994, 0.734535992, 0.416204989,
    0.0128730005, 0.0388488993, 0.821566999, 0.863682985, 0.0920531005,
    0.393972009, 0.539543986, 0.832051992, 0.842732012, 0.241144001,
    0.479557991, 0.283091992, 0.477845013, 0.385473013, 0.436587006,
    0.144308001, 0.64239502, 0.0215790998, 0.00779028982, 0.563714027,
    0.838279009, 0.41000399, 0.829086006, 1.0, 0.630598009,
    0.0233728997, 0.496217012, 0.711041987, 0.91426599, 0.695042014,
    0.33189401, 0.89844197, 0.0285679996, 0.0174966007, 0.482845992,
];

/// Clamps a strike position to the addressable slices.
#[inline]
pub fn clamp_strike_position(position: usize) -> usize {
    position.min(MAX_STRIKE_POSITION)
}

/// Returns the weight slice of a strike position, clamped to the valid range.
#[inline]
pub fn weight_slice(position: usize) -> &'static [f32] {
    let start = clamp_strike_position(position) * SLICE_LENGTH;
    &WEIGHTS[start..start + SLICE_LENGTH]
}
