//! Identifier and artifact synthesis.
//!
//! Pure functions over the injected entropy source: opaque instance ids,
//! fake key material with colon-hex fingerprints, the randomart block, and
//! the bounded telemetry draws. Telemetry is regenerated on every query and
//! never stored -- entities keep identity and status, not history.

use nimbus_platform::Entropy;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const B64_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Fresh opaque instance id: eight lowercase base-36 characters.
///
/// Display attribute only; the lookup key is always the instance name.
pub fn instance_id(rng: &mut dyn Entropy) -> String {
    (0..8)
        .map(|_| ID_ALPHABET[rng.below(ID_ALPHABET.len() as u64) as usize] as char)
        .collect()
}

/// 16 colon-separated two-hex-digit octets, e.g. `3f:a1:...:0c`.
pub fn fingerprint(rng: &mut dyn Entropy) -> String {
    (0..16)
        .map(|_| format!("{:02x}", rng.below(256)))
        .collect::<Vec<_>>()
        .join(":")
}

/// Synthesized public-key line embedding the label. Shaped like a real
/// `ssh-rsa` line but carries no cryptographic material.
pub fn public_key(label: &str, rng: &mut dyn Entropy) -> String {
    let blob: String = (0..60)
        .map(|_| B64_ALPHABET[rng.below(64) as usize] as char)
        .collect();
    format!("ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAACAQ{blob} {label}")
}

/// OpenSSH-style randomart for a colon-hex fingerprint.
///
/// Drunken-bishop walk over a 17x9 board: each octet drives four two-bit
/// diagonal steps, visit counts map to the symbol ramp, start and end cells
/// are marked S and E. Deterministic for a given fingerprint.
pub fn randomart(fingerprint: &str) -> String {
    const WIDTH: usize = 17;
    const HEIGHT: usize = 9;
    const SYMBOLS: &[u8] = b" .o+=*BOX@%&#/^";

    let mut field = [[0u8; WIDTH]; HEIGHT];
    let (mut x, mut y) = (WIDTH as i32 / 2, HEIGHT as i32 / 2);
    let (start_x, start_y) = (x as usize, y as usize);

    for octet in fingerprint.split(':') {
        let Ok(byte) = u8::from_str_radix(octet, 16) else {
            continue;
        };
        let mut bits = byte;
        for _ in 0..4 {
            x += if bits & 0x1 != 0 { 1 } else { -1 };
            y += if bits & 0x2 != 0 { 1 } else { -1 };
            x = x.clamp(0, WIDTH as i32 - 1);
            y = y.clamp(0, HEIGHT as i32 - 1);
            let cell = &mut field[y as usize][x as usize];
            *cell = cell.saturating_add(1);
            bits >>= 2;
        }
    }

    let mut lines = Vec::with_capacity(HEIGHT + 2);
    lines.push("+---[RSA 4096]----+".to_string());
    for (row, cells) in field.iter().enumerate() {
        let mut line = String::with_capacity(WIDTH + 2);
        line.push('|');
        for (col, &count) in cells.iter().enumerate() {
            let ch = if (col, row) == (x as usize, y as usize) {
                'E'
            } else if (col, row) == (start_x, start_y) {
                'S'
            } else {
                SYMBOLS[(count as usize).min(SYMBOLS.len() - 1)] as char
            };
            line.push(ch);
        }
        line.push('|');
        lines.push(line);
    }
    lines.push("+-----------------+".to_string());
    lines.join("\n")
}

// -- Telemetry draws (bounded, regenerated per query) --

/// Utilization percentage, 0-100.
pub fn percent(rng: &mut dyn Entropy) -> u64 {
    rng.below(101)
}

/// Memory figure in MB, 0-8191.
pub fn megabytes(rng: &mut dyn Entropy) -> u64 {
    rng.below(8192)
}

/// Disk figure in GB, 0-99.
pub fn disk_gb(rng: &mut dyn Entropy) -> u64 {
    rng.below(100)
}

/// Network throughput in KB/s, 0-999.
pub fn throughput(rng: &mut dyn Entropy) -> u64 {
    rng.below(1000)
}

/// Final octet for a synthesized internal address, 1-254.
pub fn ip_suffix(rng: &mut dyn Entropy) -> u64 {
    rng.below(254) + 1
}
