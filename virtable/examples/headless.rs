use std::time::{Duration, Instant};

use log::LevelFilter;
use serde_json::{json, Value};
use virtable::{
    init_file_logger, Axis, ColumnSpec, Fixed, InputEvent, RenderPlan, Size, Table, TableConfig,
    TableEvent, TextMetrics,
};

/// Print the rows a renderer would draw, one line per row.
fn print_plan(plan: &RenderPlan) {
    println!(
        "scroll ({:.1}, {:.1})  rows {}  pad {:.0}/{:.0}  shadows {:?}",
        plan.scroll_x,
        plan.scroll_y,
        plan.rows.len(),
        plan.top_pad,
        plan.bottom_pad,
        plan.shadows
    );
    if let Some(bar) = &plan.vertical {
        if !bar.hidden {
            println!(
                "  vertical thumb {:.1}+{:.1} of {:.0}",
                bar.handle_offset, bar.handle_size, bar.length
            );
        }
    }
    for row in plan.rows.iter().take(4) {
        let widths: Vec<String> = row
            .cells
            .rendered()
            .map(|cell| format!("{}:{:.0}", cell.column, cell.width))
            .collect();
        println!(
            "  {:>4} top {:>6.0} h {:>3.0}  {}",
            row.key,
            row.top,
            row.height,
            widths.join(" ")
        );
    }
    if plan.rows.len() > 4 {
        println!("  ... {} more", plan.rows.len() - 4);
    }
}

fn report(events: &[TableEvent]) {
    for event in events {
        println!("event: {:?}", event);
    }
}

fn main() -> virtable::Result<()> {
    init_file_logger("headless.log", LevelFilter::Debug)?;

    let columns = vec![
        ColumnSpec::new("id").header("ID").width(60.0).fixed(Fixed::Left),
        ColumnSpec::new("name").header("Name").width(200.0).sortable().resizable(),
        ColumnSpec::new("email").header("Email").flex_grow(1.0).min_width(240.0),
        ColumnSpec::new("note").header("Note").width(120.0).col_span(2),
        ColumnSpec::new("city").header("City").width(140.0).fixed(Fixed::Right),
    ];
    let data: Vec<Value> = (0..1000)
        .map(|i| {
            json!({
                "key": i,
                "id": i,
                "name": format!("user {i}"),
                "email": format!("user{i}@example.com"),
                "note": if i % 3 == 0 { Value::Null } else { json!("ok") },
                "city": null,
            })
        })
        .collect();

    let config = TableConfig::new().height(400.0).virtualized(true);
    let mut table = Table::new(config, columns, data)?;
    table.measure(&TextMetrics::new(Size::new(640.0, 400.0)));

    let mut render = |plan: &RenderPlan| print_plan(plan);
    table.render(&mut render);

    let start = Instant::now();
    let mut now = start;
    for _ in 0..3 {
        now += Duration::from_millis(16);
        report(&table.handle(InputEvent::Wheel { delta_x: 35.0, delta_y: 300.0 }, now));
    }
    table.render(&mut render);

    report(&table.handle(InputEvent::ScrollbarDown { axis: Axis::Vertical, x: 635.0, y: 380.0 }, now));
    report(&table.handle(InputEvent::HeaderClick { column: 1 }, now));

    report(&table.handle(InputEvent::ResizeHandleDown { column: 1, x: 260.0 }, now));
    report(&table.handle(InputEvent::PointerMove { x: 300.0, y: 20.0 }, now));
    table.render(&mut render);
    report(&table.handle(InputEvent::PointerUp, now));

    report(&table.tick(now + Duration::from_millis(200)));
    table.render(&mut render);
    Ok(())
}
