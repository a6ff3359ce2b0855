extern crate centripetal_spline;

use centripetal_spline::{CatmullRom, DerivedCurves};

fn main() {

    let points = vec![
        [0.0, 0.0, 0.0],
        [1.0, 2.0, 0.5],
        [3.0, 3.0, 1.0],
        [4.0, 0.0, 1.5],
        [7.0, 1.0, 2.0]
    ];

    let spline = CatmullRom::new(points).unwrap();

    let number_of_steps = 10;
    let step = 1.0 / number_of_steps as f64;

    println!("segment;s;x;y;z;dx;dy;dz");
    for index in 0..spline.segment_count() {
        let curves = spline.segment_curves(index, &DerivedCurves { first_derivative: true, ..DerivedCurves::default() }).unwrap();
        let derivatives = curves.first_derivative.unwrap();

        for i in 0..=number_of_steps {
            let s = step * i as f64;
            let value: Vec<f64> = curves.cubics.iter().map(|c| c.evaluate(s)).collect();
            let tangent: Vec<f64> = derivatives.iter().map(|d| d.evaluate(s)).collect();
            println!("{};{:.2};{:.2};{:.2};{:.2};{:.2};{:.2};{:.2}",
                index, s, value[0], value[1], value[2], tangent[0], tangent[1], tangent[2]);
        }
    }
}
