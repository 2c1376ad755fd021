//! Applies the AES MixColumns matrix to one column, using the worked example from FIPS-197.

use gf2m_field::{BinaryField, FieldResult, GfElement};
use tracing::info;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const MIX_COLUMNS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

fn mix_column(field: &BinaryField, column: &[GfElement; 4]) -> FieldResult<Vec<GfElement>> {
    MIX_COLUMNS
        .iter()
        .map(|row| {
            row.iter()
                .zip(column)
                .try_fold(field.zero(), |acc, (&coeff, byte)| {
                    acc + (&field.element(coeff) * byte)?
                })
        })
        .collect()
}

fn main() -> FieldResult<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let field = BinaryField::aes();
    info!(%field, "mixing one column");

    let column = [
        field.from_hex("0xd4")?,
        field.from_hex("0xbf")?,
        field.from_hex("0x5d")?,
        field.from_hex("0x30")?,
    ];
    let mixed = mix_column(&field, &column)?;

    for (before, after) in column.iter().zip(&mixed) {
        info!(%before, %after, polynomial = %after.to_polynomial());
    }
    assert_eq!(
        mixed.iter().map(GfElement::to_hex).collect::<Vec<_>>(),
        ["0x4", "0x66", "0x81", "0xe5"]
    );
    Ok(())
}
