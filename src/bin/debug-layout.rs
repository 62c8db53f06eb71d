/// Diagnostic tool to exercise the squarified layout engine on a list of
/// weights and dump the resulting rectangles.
use anyhow::Context;
use squarify_rs::{squarify, Rect, WeightedRect};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("squarify_rs=debug".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let weights: Vec<f64> = if args.is_empty() {
        vec![3.0, 2.0, 1.0]
    } else {
        args.iter()
            .map(|a| {
                a.parse::<f64>()
                    .with_context(|| format!("invalid weight '{a}'"))
            })
            .collect::<anyhow::Result<_>>()?
    };

    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);

    println!("=== DIAGNOSTIC: Squarified Layout ===");
    println!("Weights: {weights:?}");
    println!(
        "Bounds:  {:.0}x{:.0} at ({:.0}, {:.0})",
        bounds.w, bounds.h, bounds.x, bounds.y
    );

    let mut items: Vec<WeightedRect> = weights.iter().map(|&w| WeightedRect::new(w)).collect();
    squarify(&mut items, bounds);

    println!("\n[1] {} rectangles:", items.len());
    for (i, it) in items.iter().enumerate() {
        println!(
            "    [{}] weight {:.2} -> {:.1}x{:.1} ({:.0} area) at ({:.1}, {:.1})",
            i,
            it.weight,
            it.w,
            it.h,
            it.area(),
            it.x,
            it.y
        );
    }

    println!("\n[2] Checking area coverage:");
    let area_sum: f64 = items.iter().map(|it| it.area()).sum();
    println!("    Total rect area: {area_sum:.1}");
    println!("    Bounds area:     {:.1}", bounds.area());
    if bounds.area() > 0.0 {
        println!("    Coverage: {:.1}%", area_sum / bounds.area() * 100.0);
    }

    Ok(())
}
