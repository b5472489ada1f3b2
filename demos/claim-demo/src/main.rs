use claims::{ClaimExtractor, EvidenceSource, SentenceExtractor};
use verdict::Analyzer;

#[tokio::main]
async fn main() {
    println!("=== Claim Demo: offline verdicts ===\n");

    let text = "The earth is round. This miracle cure is hidden from you. \
                The sky appears blue due to Rayleigh scattering.";

    // 1. Extraction
    println!("--- Extraction ---");
    let claims = SentenceExtractor.extract(text, 5);
    for c in &claims {
        println!("  [{:?}..{:?}] {}", c.start_index, c.end_index, c.text);
    }

    // 2. Analysis (no provider configured, every claim takes the fallback path)
    println!("\n--- Analysis ---");
    let analyzer = Analyzer::offline();
    let evidence = vec![
        EvidenceSource::new("Encyclopedia", None, "General reference text.", Some(0.9)).shared(),
    ];

    for c in &claims {
        let decision = analyzer.analyze(&c.text, &evidence).await;
        println!(
            "  {:<9} {:>5.1}%  {}",
            decision.verdict.as_str(),
            decision.confidence,
            decision.claim_text
        );
        println!("            {}", decision.rationale);
    }

    // 3. Empty evidence synthesizes a placeholder source
    println!("\n--- No Evidence ---");
    let decision = analyzer.analyze("They do not want you to know this", &[]).await;
    match serde_json::to_string_pretty(&decision) {
        Ok(s) => println!("{s}"),
        Err(e) => println!("serialization failed: {e}"),
    }
}
