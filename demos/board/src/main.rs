//! board-demo — drives the departure board against an embedded fixture.
//!
//! Builds a five-station world with four vehicles (two circulating trains,
//! a late ferry, a bus diverted to a depot), then prints the departure
//! board for Sandpool Central and the arrivals board for Sandpool Bay.
//! Run with `RUST_LOG=debug` to watch the scanner and synthesizer work.

use std::io::Cursor;

use anyhow::Result;

use db_board::display::{StationIcon, calling_at_line, entry_destination_icon, headline};
use db_board::{BoardMode, BoardStop, KindFilter, page, recompute_board, visible_count};
use db_core::{DayLength, GameClock, GameTime, StationId};
use db_model::{World, load_world_readers};

// ── Constants ─────────────────────────────────────────────────────────────────

const DAY_TICKS:    u32   = 74;  // classic day length
const NOW_DAY:      u32   = 100;
const HORIZON_DAYS: u32   = 3;
const PAGE_ROWS:    usize = 8;

const BOARD_STATION:   u16 = 0; // Sandpool Central
const ARRIVAL_STATION: u16 = 3; // Sandpool Bay

// ── Fixture CSVs ──────────────────────────────────────────────────────────────

const STATIONS_CSV: &str = "\
station_id,name,kind,facilities\n\
0,Sandpool Central,station,rail|road\n\
1,Fort Gravel,station,rail\n\
2,Gravel Heights,station,rail|dock\n\
3,Sandpool Bay,station,dock|airport\n\
4,Brindley Fields,station,road\n\
";

// Vehicle 1 is mid-load at Gravel Heights and running 5 ticks early;
// vehicle 2 is 30 ticks late; vehicle 3 has been diverted to a depot.
const VEHICLES_CSV: &str = "\
vehicle_id,name,kind,passengers,cur_order,activity,order_ticks,lateness\n\
0,Flying Sandpooler,train,1,0,travelling,10,0\n\
1,Gravel Express,train,1,1,loading,20,-5\n\
2,Bay Runner,ship,1,0,travelling,5,30\n\
3,Brindley Omnibus,road,1,0,to_depot,0,0\n\
";

const ORDERS_CSV: &str = "\
vehicle_id,seq,action,dest,travel_ticks,wait_ticks,load,unload,stop\n\
0,0,station,0,15,10,load,unload,stop\n\
0,1,station,1,20,5,load,unload,stop\n\
0,2,station,2,25,5,load,unload,stop\n\
1,0,station,0,30,10,load,unload,stop\n\
1,1,station,2,35,10,load,unload,stop\n\
1,2,station,1,25,10,load,unload,stop\n\
2,0,station,2,40,15,load,unload,stop\n\
2,1,station,3,40,15,load,unload,stop\n\
3,0,station,0,20,10,load,unload,stop\n\
3,1,station,4,20,10,load,unload,stop\n\
";

// ── Rendering ─────────────────────────────────────────────────────────────────

fn icon_label(icon: StationIcon) -> &'static str {
    match icon {
        StationIcon::None  => "",
        StationIcon::Train => "  [rail interchange]",
        StationIcon::Ship  => "  [ferry interchange]",
        StationIcon::Plane => "  [airport]",
    }
}

fn print_board(world: &World, station: StationId, mode: BoardMode, filter: KindFilter) {
    let label = match mode {
        BoardMode::Departures => "Departures",
        BoardMode::Arrivals => "Arrivals",
    };
    let entries = recompute_board(world, station, mode, BoardStop::Station);
    let total = visible_count(&entries, world.clock, HORIZON_DAYS, mode, filter);

    println!(
        "── {label} — {} ({total} within {HORIZON_DAYS} days) ──",
        world.stations.name(station),
    );
    let rows = page(&entries, world.clock, HORIZON_DAYS, mode, filter, 0, PAGE_ROWS);
    for row in &rows {
        let icon = entry_destination_icon(row, &world.stations);
        println!("{}{}", headline(row, &world.stations, mode), icon_label(icon));
        println!("    {}", calling_at_line(row, &world.stations));
    }
    if rows.is_empty() {
        println!("(no services)");
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let clock = GameClock::new(GameTime::new(NOW_DAY, 0), DayLength(DAY_TICKS));
    let world = load_world_readers(
        Cursor::new(STATIONS_CSV),
        Cursor::new(VEHICLES_CSV),
        Cursor::new(ORDERS_CSV),
        clock,
    )?;
    println!(
        "World: {} stations, {} vehicles, clock {}",
        world.stations.len(),
        world.vehicles.len(),
        world.clock,
    );
    println!();

    print_board(&world, StationId(BOARD_STATION), BoardMode::Departures, KindFilter::ALL);

    let trains_only = KindFilter { trains: true, ..KindFilter::NONE };
    println!("(trains only)");
    print_board(&world, StationId(BOARD_STATION), BoardMode::Departures, trains_only);

    print_board(&world, StationId(ARRIVAL_STATION), BoardMode::Arrivals, KindFilter::ALL);

    Ok(())
}
