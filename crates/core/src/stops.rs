//! Stock gradients for the bundled gauges.

/// Battery charge: red through amber and yellow into green as charge rises.
pub const CHARGE: [[u8; 3]; 4] = [
    [231, 76, 60],
    [230, 126, 34],
    [241, 196, 15],
    [46, 204, 113],
];

/// Health: green draining through yellow and amber into red.
pub const HEALTH: [[u8; 3]; 4] = [
    [46, 204, 113],
    [241, 196, 15],
    [230, 126, 34],
    [231, 76, 60],
];
