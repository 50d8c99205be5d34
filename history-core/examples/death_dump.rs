//! Play through a short scripted session and print the final history.
//!
//! Run with: `RUST_LOG=history_core=debug cargo run -p history-core --example death_dump`

use history_core::{ArtifactId, HistoryKind, Session, SessionConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = Session::start(SessionConfig::new("Beren"))?;

    let silmaril = ArtifactId::new(1).ok_or("bad artifact id")?;
    let dagger = ArtifactId::new(2).ok_or("bad artifact id")?;
    session.artifacts_mut().register(silmaril, "a Silmaril");
    session.artifacts_mut().register(dagger, "the Dagger of Angrist");

    session.state_mut().set_depth(3);
    session.state_mut().spend_energy(5_000);
    session.add_or_update_artifact(dagger, false, true)?;
    session.gain_level(8)?;

    session.state_mut().set_depth(20);
    session.state_mut().spend_energy(40_000);
    session.add_or_update_artifact(dagger, true, true)?;
    session.add_event_simple("Slew Carcharoth's packmate", HistoryKind::SlayUnique, None)?;

    session.state_mut().set_depth(30);
    session.state_mut().spend_energy(20_000);
    session.add_or_update_artifact(silmaril, false, true)?;
    session.lose_artifact(dagger)?;

    println!("=== Character sheet (during play) ===\n");
    println!(
        "{}",
        history_core::dump::format_entries(session.get_entries())
    );

    let dump = session.finish("Carcharoth");
    println!("=== Death dump ===\n");
    println!("{dump}");

    Ok(())
}
