//! Drive the chocolate pour to saturation with fixed-step ticks.

use gateau::Session;

fn main() {
    let mut session = Session::new();
    session.start_pour();

    let dt = 0.25;
    let mut elapsed = 0.0;
    while session.config().pour.pouring {
        session.tick(dt);
        elapsed += dt;
        let progress = session.config().pour.progress;
        println!("t = {elapsed:5.2}s  glaze {:5.1}%", progress * 100.0);
    }
    println!("pour auto-stopped after {elapsed:.2}s");
}
