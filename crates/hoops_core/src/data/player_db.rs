//! Built-in player pool
//!
//! Career approximations (PPG, RPG, APG, TS%, 3P%, FT%, OBPM, DBPM, WS/48,
//! 3PA rate) for all-time greats plus a bench of role players. Extend the pool
//! at runtime with `data::loader` instead of editing this table.

use once_cell::sync::Lazy;

use crate::models::Era::{self, *};
use crate::models::Position::{self, *};
use crate::models::{Player, PlayerProfile};

/// Ratings are computed once; callers get clones.
static BUILTIN_POOL: Lazy<Vec<Player>> =
    Lazy::new(|| builtin_profiles().into_iter().map(Player::new).collect());

/// Fresh copy of the built-in pool with ratings computed.
pub fn player_pool() -> Vec<Player> {
    BUILTIN_POOL.clone()
}

/// Case-insensitive lookup in the built-in pool.
pub fn find_builtin(name: &str) -> Option<Player> {
    let name = name.trim();
    BUILTIN_POOL.iter().find(|p| p.name().eq_ignore_ascii_case(name)).cloned()
}

/// `[ppg, rpg, apg, ts, three_pct, ft_pct, obpm, dbpm, ws48, three_rate]`
type CareerLine = [f32; 10];

fn row(
    name: &str,
    pos_primary: Position,
    pos_secondary: &[Position],
    era: Era,
    line: CareerLine,
    height_in: u8,
    weight_lb: u16,
) -> PlayerProfile {
    let [ppg, rpg, apg, ts, three_pct, ft_pct, obpm, dbpm, ws48, three_rate] = line;
    PlayerProfile {
        name: name.to_string(),
        pos_primary,
        pos_secondary: pos_secondary.to_vec(),
        era,
        ppg,
        rpg,
        apg,
        ts,
        three_pct,
        ft_pct,
        obpm,
        dbpm,
        ws48,
        three_rate,
        height_in,
        weight_lb,
    }
}

#[rustfmt::skip]
pub fn builtin_profiles() -> Vec<PlayerProfile> {
    vec![
        row("Michael Jordan", SG, &[SF], Nineties, [30.1, 6.2, 5.3, 0.569, 0.327, 0.835, 7.9, 1.3, 0.250, 0.12], 78, 198),
        row("LeBron James", SF, &[PF, PG], Tens, [27.1, 7.5, 7.3, 0.594, 0.345, 0.735, 6.8, 1.9, 0.232, 0.28], 81, 250),
        row("Kareem Abdul-Jabbar", C, &[PF], Seventies, [24.6, 11.2, 3.6, 0.592, 0.000, 0.721, 5.7, 2.2, 0.228, 0.00], 86, 225),
        row("Magic Johnson", PG, &[SG], Eighties, [19.5, 7.2, 11.2, 0.610, 0.303, 0.848, 6.9, 1.0, 0.225, 0.18], 81, 215),
        row("Larry Bird", SF, &[PF], Eighties, [24.3, 10.0, 6.3, 0.564, 0.375, 0.886, 5.6, 2.0, 0.203, 0.24], 81, 220),
        row("Shaquille O'Neal", C, &[PF], Aughts, [23.7, 10.9, 2.5, 0.586, 0.045, 0.527, 4.4, 2.0, 0.208, 0.01], 85, 325),
        row("Tim Duncan", PF, &[C], Aughts, [19.0, 10.8, 3.0, 0.551, 0.179, 0.696, 2.9, 3.5, 0.209, 0.02], 83, 250),
        row("Kobe Bryant", SG, &[SF], Aughts, [25.0, 5.2, 4.7, 0.555, 0.329, 0.837, 4.5, 0.7, 0.170, 0.28], 78, 212),
        row("Hakeem Olajuwon", C, &[PF], Nineties, [21.8, 11.1, 2.5, 0.552, 0.202, 0.712, 3.6, 2.7, 0.178, 0.02], 84, 255),
        row("Stephen Curry", PG, &[SG], Tens, [24.7, 4.7, 6.4, 0.628, 0.428, 0.910, 7.7, 0.8, 0.212, 0.55], 74, 190),
        row("Kevin Durant", SF, &[PF], Tens, [27.3, 7.1, 4.3, 0.635, 0.388, 0.886, 5.7, 1.8, 0.214, 0.36], 82, 240),
        row("Giannis Antetokounmpo", PF, &[C, SF], Twenties, [24.1, 10.3, 4.7, 0.611, 0.286, 0.690, 6.6, 2.2, 0.208, 0.20], 83, 242),
        row("Nikola Jokic", C, &[PF], Twenties, [20.9, 10.7, 6.9, 0.644, 0.364, 0.829, 10.4, 2.0, 0.260, 0.28], 83, 284),
        row("Wilt Chamberlain", C, &[PF], Sixties, [30.1, 22.9, 4.4, 0.540, 0.000, 0.511, 5.0, 2.0, 0.248, 0.00], 84, 275),
        row("Bill Russell", C, &[PF], Sixties, [15.1, 22.5, 4.3, 0.493, 0.000, 0.561, 1.5, 4.8, 0.193, 0.00], 82, 215),
        row("Jerry West", SG, &[PG], Sixties, [27.0, 5.8, 6.7, 0.580, 0.000, 0.814, 6.1, 1.1, 0.213, 0.02], 75, 175),
        row("Oscar Robertson", PG, &[SG], Sixties, [25.7, 7.5, 9.5, 0.550, 0.000, 0.838, 6.3, 1.2, 0.207, 0.02], 77, 205),
        row("Dirk Nowitzki", PF, &[C], Aughts, [20.7, 7.5, 2.4, 0.580, 0.384, 0.879, 3.8, 0.7, 0.178, 0.32], 84, 245),
        row("Kevin Garnett", PF, &[C], Aughts, [17.8, 10.0, 3.7, 0.547, 0.275, 0.789, 4.6, 3.0, 0.184, 0.10], 83, 240),
        row("Karl Malone", PF, &[C], Nineties, [25.0, 10.1, 3.6, 0.577, 0.274, 0.742, 4.8, 1.4, 0.205, 0.07], 81, 250),
        row("Charles Barkley", PF, &[SF], Nineties, [22.1, 11.7, 3.9, 0.612, 0.266, 0.735, 5.5, 0.8, 0.216, 0.08], 78, 252),
        row("Dwyane Wade", SG, &[PG], Aughts, [22.0, 4.7, 5.4, 0.554, 0.293, 0.765, 4.0, 1.6, 0.159, 0.15], 76, 220),
        row("Allen Iverson", SG, &[PG], Aughts, [26.7, 3.7, 6.2, 0.518, 0.313, 0.780, 3.8, -0.5, 0.102, 0.32], 72, 165),
        row("Kawhi Leonard", SF, &[SG], Twenties, [19.9, 6.4, 3.0, 0.600, 0.386, 0.857, 4.8, 2.3, 0.212, 0.30], 79, 225),
        row("Chris Paul", PG, &[SG], Tens, [17.5, 4.5, 9.4, 0.589, 0.371, 0.873, 6.9, 2.3, 0.247, 0.30], 72, 175),
        row("James Harden", SG, &[PG], Tens, [24.6, 5.6, 7.1, 0.610, 0.366, 0.860, 5.7, 0.7, 0.222, 0.50], 77, 220),
        row("Russell Westbrook", PG, &[SG], Tens, [22.0, 7.3, 8.4, 0.520, 0.308, 0.785, 3.5, 0.5, 0.137, 0.25], 75, 200),
        row("Paul Pierce", SF, &[SG], Aughts, [19.7, 5.6, 3.5, 0.568, 0.369, 0.806, 3.6, 1.3, 0.178, 0.31], 79, 235),
        row("Ray Allen", SG, &[SF], Aughts, [18.9, 4.1, 3.4, 0.583, 0.400, 0.892, 3.3, 0.8, 0.157, 0.43], 77, 205),
        row("Reggie Miller", SG, &[SF], Nineties, [18.2, 3.0, 3.0, 0.614, 0.395, 0.888, 3.1, 0.7, 0.172, 0.40], 78, 185),
        row("Steve Nash", PG, &[SG], Aughts, [14.3, 3.0, 8.5, 0.607, 0.428, 0.904, 5.4, -0.5, 0.212, 0.32], 75, 178),
        row("Jason Kidd", PG, &[SG], Aughts, [12.6, 6.3, 8.7, 0.515, 0.349, 0.750, 3.6, 2.6, 0.179, 0.30], 76, 210),
        row("Gary Payton", PG, &[SG], Nineties, [16.3, 3.9, 6.7, 0.533, 0.317, 0.729, 3.2, 1.7, 0.159, 0.18], 76, 180),
        row("Vince Carter", SG, &[SF], Aughts, [16.7, 4.3, 3.1, 0.548, 0.374, 0.798, 2.2, 0.6, 0.118, 0.30], 78, 220),
        row("Tracy McGrady", SG, &[SF], Aughts, [19.6, 5.6, 4.4, 0.538, 0.338, 0.747, 4.3, 0.5, 0.151, 0.28], 80, 225),
        row("Carmelo Anthony", SF, &[PF], Tens, [22.5, 6.2, 2.7, 0.545, 0.353, 0.814, 2.3, 0.0, 0.104, 0.29], 80, 238),
        row("Chris Bosh", PF, &[C], Tens, [19.2, 8.5, 2.0, 0.567, 0.339, 0.800, 2.2, 1.0, 0.158, 0.22], 83, 235),
        row("Dwight Howard", C, &[PF], Tens, [15.7, 11.8, 1.3, 0.609, 0.180, 0.568, 1.4, 2.8, 0.150, 0.02], 83, 265),
        row("Yao Ming", C, &[PF], Aughts, [19.0, 9.2, 1.6, 0.614, 0.100, 0.833, 3.3, 1.5, 0.200, 0.01], 88, 310),
        row("Manu Ginobili", SG, &[PG], Aughts, [13.3, 3.5, 3.8, 0.580, 0.370, 0.826, 4.7, 0.9, 0.193, 0.30], 78, 205),
        row("Tony Parker", PG, &[SG], Aughts, [15.5, 2.7, 5.6, 0.551, 0.327, 0.751, 2.3, -0.3, 0.120, 0.12], 74, 185),
        row("Pau Gasol", PF, &[C], Tens, [17.0, 9.2, 3.2, 0.579, 0.298, 0.752, 2.4, 1.5, 0.174, 0.10], 84, 250),
        row("Alonzo Mourning", C, &[PF], Aughts, [17.1, 8.5, 1.1, 0.565, 0.100, 0.692, 1.4, 3.3, 0.160, 0.01], 82, 240),
        row("Dennis Rodman", PF, &[SF], Nineties, [7.3, 13.1, 1.8, 0.520, 0.230, 0.584, 1.3, 2.8, 0.161, 0.05], 79, 210),
        row("Dikembe Mutombo", C, &[PF], Aughts, [9.8, 10.3, 0.9, 0.523, 0.000, 0.685, -0.4, 3.0, 0.147, 0.00], 85, 245),
        row("Andre Iguodala", SF, &[SG], Tens, [11.3, 4.9, 4.2, 0.544, 0.329, 0.707, 2.1, 1.9, 0.128, 0.21], 78, 215),
        row("Shane Battier", SF, &[PF], Aughts, [8.6, 4.2, 1.8, 0.580, 0.385, 0.747, 1.0, 1.7, 0.102, 0.40], 80, 220),
        row("Trevor Ariza", SF, &[SG], Tens, [10.4, 4.8, 2.1, 0.530, 0.351, 0.774, 0.5, 1.3, 0.092, 0.45], 80, 215),
        row("PJ Tucker", PF, &[SF], Twenties, [6.9, 5.5, 1.3, 0.566, 0.363, 0.760, 0.3, 1.4, 0.090, 0.50], 77, 245),
        row("Patrick Beverley", PG, &[SG], Tens, [8.5, 3.4, 3.2, 0.525, 0.372, 0.756, 0.9, 1.9, 0.103, 0.38], 73, 180),
        row("Derrick White", SG, &[PG], Twenties, [12.4, 3.4, 4.1, 0.586, 0.368, 0.869, 1.5, 1.5, 0.121, 0.35], 76, 190),
        row("Marcus Smart", PG, &[SG], Twenties, [10.6, 3.5, 4.6, 0.525, 0.325, 0.782, 1.8, 1.9, 0.105, 0.40], 76, 220),
        row("Robert Horry", PF, &[SF], Aughts, [7.0, 4.8, 2.1, 0.533, 0.341, 0.728, 0.8, 1.0, 0.096, 0.30], 82, 240),
        row("Derek Fisher", PG, &[SG], Aughts, [8.3, 2.1, 3.0, 0.519, 0.377, 0.813, 0.7, 0.8, 0.084, 0.35], 73, 200),
        row("Boris Diaw", PF, &[C], Tens, [8.6, 4.4, 3.5, 0.553, 0.334, 0.727, 1.5, 0.9, 0.111, 0.25], 80, 250),
        row("Thabo Sefolosha", SG, &[SF], Tens, [5.9, 3.9, 1.5, 0.552, 0.353, 0.747, 0.2, 1.7, 0.087, 0.30], 79, 215),
        row("Danny Green", SG, &[SF], Tens, [8.7, 3.4, 1.5, 0.561, 0.401, 0.797, 0.8, 1.5, 0.110, 0.50], 78, 215),
        row("Tyson Chandler", C, &[PF], Tens, [8.2, 9.0, 0.9, 0.638, 0.000, 0.643, 0.3, 2.1, 0.167, 0.00], 85, 240),
        row("Steven Adams", C, &[PF], Twenties, [9.2, 8.2, 1.6, 0.595, 0.000, 0.528, 0.7, 1.3, 0.138, 0.01], 83, 265),
        row("DeAndre Jordan", C, &[PF], Tens, [9.0, 10.3, 1.0, 0.647, 0.000, 0.470, 0.3, 1.8, 0.171, 0.01], 83, 265),
        row("Jae Crowder", PF, &[SF], Twenties, [10.0, 4.3, 2.0, 0.538, 0.353, 0.775, 0.7, 1.1, 0.095, 0.40], 78, 235),
        row("Joe Harris", SG, &[SF], Twenties, [10.6, 3.2, 1.6, 0.621, 0.439, 0.796, 1.2, 0.3, 0.123, 0.60], 78, 220),
        row("Kyle Korver", SG, &[SF], Tens, [9.7, 2.8, 1.7, 0.604, 0.429, 0.878, 0.8, 0.3, 0.130, 0.60], 79, 212),
        row("Kendrick Perkins", C, &[PF], Tens, [5.4, 5.8, 0.9, 0.515, 0.000, 0.589, -1.4, 2.5, 0.067, 0.00], 82, 270),
        row("Nick Collison", PF, &[C], Tens, [5.9, 5.2, 1.0, 0.552, 0.100, 0.768, 0.3, 1.1, 0.089, 0.01], 81, 255),
        row("Iman Shumpert", SG, &[SF], Tens, [7.3, 3.4, 1.8, 0.497, 0.337, 0.757, -0.5, 1.3, 0.062, 0.35], 77, 215),
        row("Avery Bradley", SG, &[PG], Tens, [11.0, 2.9, 1.8, 0.533, 0.366, 0.781, 0.8, 1.2, 0.092, 0.38], 74, 180),
        row("Cory Joseph", PG, &[SG], Twenties, [7.0, 2.5, 3.0, 0.538, 0.344, 0.780, 0.1, 0.5, 0.080, 0.25], 75, 200),
        row("Royce O'Neale", SF, &[PF], Twenties, [8.3, 4.6, 2.4, 0.565, 0.381, 0.773, 0.5, 0.8, 0.098, 0.45], 77, 225),
        row("Delon Wright", PG, &[SG], Twenties, [7.0, 3.2, 3.0, 0.550, 0.358, 0.788, 1.1, 1.3, 0.106, 0.30], 77, 185),
        row("Doug Christie", SG, &[SF], Aughts, [11.2, 4.1, 3.6, 0.531, 0.355, 0.788, 1.4, 1.9, 0.109, 0.25], 77, 200),
        row("Tayshaun Prince", SF, &[PF], Aughts, [11.1, 4.3, 2.4, 0.528, 0.370, 0.757, 0.5, 1.5, 0.093, 0.28], 81, 215),
        row("Raja Bell", SG, &[SF], Aughts, [9.9, 2.9, 1.7, 0.552, 0.406, 0.780, 0.3, 1.1, 0.091, 0.45], 77, 210),
        row("Jared Dudley", SF, &[PF], Tens, [7.3, 3.2, 1.5, 0.548, 0.390, 0.740, 0.1, 0.7, 0.084, 0.35], 78, 230),
        row("Quentin Richardson", SG, &[SF], Aughts, [10.3, 4.7, 1.5, 0.517, 0.357, 0.700, 0.3, 0.4, 0.076, 0.42], 78, 220),
        row("Anthony Tolliver", PF, &[C], Tens, [6.4, 3.4, 0.8, 0.551, 0.379, 0.773, 0.2, 0.3, 0.070, 0.42], 80, 240),
        row("Michael Cooper", SG, &[SF], Eighties, [8.9, 3.2, 4.2, 0.531, 0.345, 0.833, 1.6, 1.5, 0.118, 0.25], 77, 174),
        row("Kurt Rambis", PF, &[C], Eighties, [5.2, 5.6, 1.1, 0.540, 0.000, 0.700, 0.3, 0.7, 0.075, 0.01], 80, 213),
        row("Bill Cartwright", C, &[PF], Nineties, [13.2, 6.3, 1.4, 0.531, 0.000, 0.779, 0.2, 1.0, 0.108, 0.01], 85, 245),
        row("Horace Grant", PF, &[C], Nineties, [11.2, 8.1, 2.2, 0.558, 0.200, 0.741, 1.5, 1.4, 0.135, 0.10], 81, 215),
        row("Bryon Russell", SF, &[SG], Nineties, [8.9, 3.7, 1.3, 0.530, 0.379, 0.757, 0.6, 0.8, 0.097, 0.35], 79, 215),
        row("Luc Longley", C, &[PF], Nineties, [7.2, 4.9, 1.7, 0.525, 0.000, 0.737, 0.3, 0.9, 0.089, 0.01], 86, 265),
        row("Derek Harper", PG, &[SG], Nineties, [13.3, 2.4, 5.5, 0.528, 0.359, 0.800, 1.1, 1.5, 0.120, 0.30], 73, 185),
        row("Rick Fox", SF, &[PF], Aughts, [9.6, 3.8, 2.8, 0.537, 0.348, 0.770, 0.9, 1.1, 0.093, 0.33], 79, 230),
        row("Antonio Davis", PF, &[C], Nineties, [10.0, 7.5, 1.2, 0.513, 0.000, 0.758, 0.6, 1.2, 0.110, 0.01], 81, 245),
        row("Matt Bonner", PF, &[C], Aughts, [6.9, 3.1, 0.8, 0.582, 0.414, 0.782, -0.3, 0.2, 0.100, 0.60], 82, 235),
        row("James Posey", SF, &[SG], Aughts, [8.6, 4.7, 1.6, 0.530, 0.369, 0.795, 0.5, 1.0, 0.102, 0.38], 80, 215),
        row("Eduardo Nájera", PF, &[SF], Aughts, [5.1, 3.7, 0.9, 0.525, 0.200, 0.710, -0.4, 1.0, 0.070, 0.10], 80, 235),
        row("Jared Jeffries", SF, &[PF], Aughts, [4.8, 4.1, 1.3, 0.493, 0.265, 0.685, -0.5, 1.1, 0.068, 0.20], 81, 230),
        row("Desmond Mason", SG, &[SF], Aughts, [12.1, 4.5, 1.6, 0.519, 0.303, 0.780, 0.2, 0.6, 0.091, 0.18], 77, 222),
        row("Keith Bogans", SG, &[SF], Aughts, [6.3, 2.7, 1.3, 0.494, 0.353, 0.754, -0.4, 0.6, 0.073, 0.35], 77, 215),
        row("Rasho Nesterović", C, &[PF], Aughts, [6.8, 5.1, 0.9, 0.526, 0.000, 0.732, 0.2, 1.4, 0.094, 0.01], 84, 250),
        row("Steve Blake", PG, &[SG], Aughts, [6.5, 2.1, 4.0, 0.520, 0.388, 0.796, 0.3, 0.6, 0.082, 0.34], 75, 185),
        row("Francisco Garcia", SG, &[SF], Aughts, [7.9, 2.6, 1.4, 0.531, 0.362, 0.805, 0.1, 0.4, 0.087, 0.38], 78, 195),
        row("Reggie Evans", PF, &[C], Aughts, [4.1, 7.1, 0.4, 0.510, 0.000, 0.540, -1.6, 2.3, 0.071, 0.00], 80, 245),
        row("Ish Smith", PG, &[SG], Twenties, [7.3, 2.4, 3.8, 0.502, 0.310, 0.725, 0.2, 0.1, 0.085, 0.25], 72, 175),
        row("Maxi Kleber", PF, &[C], Twenties, [7.3, 4.2, 1.1, 0.552, 0.366, 0.795, 0.6, 1.2, 0.108, 0.48], 82, 230),
        row("Royce White", PF, &[SF], Tens, [3.0, 2.3, 1.2, 0.465, 0.250, 0.667, -1.2, 0.5, 0.060, 0.20], 80, 260),
        row("Cody Zeller", C, &[PF], Twenties, [8.5, 6.0, 1.3, 0.568, 0.229, 0.758, 0.4, 1.0, 0.105, 0.05], 84, 240),
        row("Cam Payne", PG, &[SG], Twenties, [8.9, 2.0, 3.7, 0.542, 0.360, 0.780, 0.5, 0.3, 0.096, 0.35], 73, 183),
        row("Darius Bazley", PF, &[SF], Twenties, [7.3, 4.3, 0.9, 0.495, 0.321, 0.691, -0.8, 1.0, 0.082, 0.30], 80, 220),
        row("Isaiah Joe", SG, &[PG], Twenties, [6.5, 1.8, 1.2, 0.598, 0.407, 0.860, -0.4, 0.2, 0.097, 0.66], 75, 170),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique() {
        let pool = player_pool();
        let names: HashSet<&str> = pool.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), pool.len());
    }

    #[test]
    fn test_every_position_has_depth() {
        let pool = player_pool();
        for pos in Position::ALL {
            let count = pool.iter().filter(|p| p.plays(pos)).count();
            assert!(count >= 10, "{pos} has only {count} candidates");
        }
    }

    #[test]
    fn test_find_builtin_ignores_case() {
        let curry = find_builtin("  stephen CURRY ").unwrap();
        assert_eq!(curry.position(), PG);
        assert!(curry.ratings.three > 90.0);
        assert!(find_builtin("Nobody Special").is_none());
    }

    #[test]
    fn test_builtin_profiles_sane() {
        for p in builtin_profiles() {
            assert!((0.0..=1.0).contains(&p.ts), "{}", p.name);
            assert!((0.0..=1.0).contains(&p.three_pct), "{}", p.name);
            assert!((0.0..=1.0).contains(&p.ft_pct), "{}", p.name);
            assert!(p.height_in >= 70 && p.height_in <= 90, "{}", p.name);
        }
    }
}
