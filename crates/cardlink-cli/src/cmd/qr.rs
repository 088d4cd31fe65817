use anyhow::Result;
use cardlink_core::{BusinessCard, CardId};
use std::path::Path;

/// Render the visit URL for a card as a scannable unicode QR code.
pub fn run(root: &Path, id: &str, base_url: &str) -> Result<()> {
    let id = CardId::parse(id)?;
    // Verify the card exists so the QR never points at a dead id.
    let card = BusinessCard::load(root, &id)?;

    let url = format!("{}/visit/{}", base_url.trim_end_matches('/'), card.id);
    println!("Visit URL: {url}");
    println!();

    match render_qr(&url) {
        Ok(qr) => print_qr_boxed(&qr),
        Err(_) => {
            // QR rendering failed — fall back to plain URL.
            println!("  {url}");
        }
    }
    Ok(())
}

fn render_qr(url: &str) -> Result<String, qrcode::types::QrError> {
    use qrcode::{render::unicode, QrCode};
    let code = QrCode::new(url.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Dark)
        .light_color(unicode::Dense1x2::Light)
        .build())
}

fn print_qr_boxed(qr: &str) {
    let lines: Vec<&str> = qr.lines().collect();
    let content_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    // 2 spaces padding on each side
    let inner = content_width + 4;
    let border = "─".repeat(inner);

    println!("  ┌{border}┐");
    println!("  │{}│", " ".repeat(inner));
    for line in &lines {
        let pad = inner.saturating_sub(line.chars().count() + 2);
        println!("  │  {line}{}│", " ".repeat(pad));
    }
    println!("  │{}│", " ".repeat(inner));
    println!("  └{border}┘");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_produces_block_output() {
        let qr = render_qr("http://localhost:4170/visit/000000000000000000000000").unwrap();
        assert!(!qr.is_empty());
        assert!(qr.lines().count() > 10);
    }
}
