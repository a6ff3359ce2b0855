extern crate centripetal_spline;

use centripetal_spline::{CatmullRom, InterpolantSequence};

fn main() {

    let points = vec![
        (0.0, 1.0),
        (1.0, -1.0),
        (2.0, 0.0),
        (4.0, 3.0),
        (5.0, 1.0),
        (6.0, 1.0)
    ];

    let spline = CatmullRom::new(points).unwrap();
    let interpolants = InterpolantSequence::uniform(21).unwrap();

    let result = spline.interpolate(&interpolants);

    println!("x;y");
    for row in result.row_iter() {
        println!("{:.2};{:.2}", row[0], row[1]);
    }
}
