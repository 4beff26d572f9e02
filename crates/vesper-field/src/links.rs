//! Proximity graph between motes
//!
//! Every unordered pair within the threshold distance gets a link whose alpha
//! falls off linearly with distance. This is an O(n^2) pass per frame and is
//! kept that way on purpose: the quadratic pair walk is what determines the
//! constellation density, and n stays small (~150). Do not swap in a spatial
//! index without revisiting the visuals; this does not scale past a few
//! hundred motes.

use crate::config::LinkConfig;
use crate::entity::Mote;

/// One drawable link between two motes, by index into the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// Stroke alpha, already scaled by the distance falloff
    pub alpha: f32,
}

/// Compute all links for the current frame
pub fn proximity_links(motes: &[Mote], config: &LinkConfig) -> Vec<Link> {
    let mut links = Vec::new();

    for i in 0..motes.len() {
        for j in (i + 1)..motes.len() {
            let distance = motes[i].pos.distance(motes[j].pos);
            if distance < config.threshold {
                links.push(Link {
                    a: i,
                    b: j,
                    alpha: config.base_alpha * (1.0 - distance / config.threshold),
                });
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_core::Vec2;

    fn mote_at(x: f32, y: f32) -> Mote {
        Mote {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: 2.0,
            opacity: 0.5,
            twinkle_rate: 0.02,
            twinkle_direction: 1.0,
        }
    }

    #[test]
    fn link_alpha_at_half_threshold() {
        let config = LinkConfig::default();
        let motes = [mote_at(0.0, 0.0), mote_at(50.0, 0.0)];
        let links = proximity_links(&motes, &config);
        assert_eq!(links.len(), 1);
        // 0.15 * (1 - 50/100) = 0.075
        assert!((links[0].alpha - 0.075).abs() < 1e-6);
    }

    #[test]
    fn no_link_at_or_past_threshold() {
        let config = LinkConfig::default();
        let motes = [mote_at(0.0, 0.0), mote_at(100.0, 0.0), mote_at(0.0, 250.0)];
        let links = proximity_links(&motes, &config);
        assert!(links.is_empty());
    }

    #[test]
    fn links_are_unordered_pairs() {
        let config = LinkConfig::default();
        let motes = [mote_at(0.0, 0.0), mote_at(10.0, 0.0), mote_at(0.0, 10.0)];
        let links = proximity_links(&motes, &config);
        // Three motes mutually in range: exactly 3 pairs, each counted once
        assert_eq!(links.len(), 3);
        for link in &links {
            assert!(link.a < link.b);
        }
    }

    #[test]
    fn alpha_approaches_base_at_distance_zero() {
        let config = LinkConfig::default();
        let motes = [mote_at(20.0, 20.0), mote_at(20.0, 20.0)];
        let links = proximity_links(&motes, &config);
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - config.base_alpha).abs() < 1e-6);
    }
}
