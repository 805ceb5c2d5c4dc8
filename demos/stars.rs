//! Print the star ring positions for a few strip widths.

use plateview::render::stars::star_ring;
use plateview::types::Length as Mm;

fn main() {
    for (width, height) in [(49.5, 110.0), (90.0, 200.0), (20.0, 40.0)] {
        let ring = star_ring(Mm(width), Mm(height));
        println!(
            "=== strip {} x {}: center ({}, {}), radius {} ===",
            Mm(width),
            Mm(height),
            ring.center.x.0,
            ring.center.y.0,
            ring.radius
        );
        for star in &ring.stars {
            println!(
                "  {:>5.0}°  ({:8.3}, {:8.3})",
                star.angle.0, star.position.x.0, star.position.y.0
            );
        }
    }
}
