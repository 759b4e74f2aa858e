use geobox::{
    GeoStore, LatLng, LatLngBounds, Located, generate_tags, neighbor_east, neighbor_north,
    tag_bounds, tags_for_region,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see tiling decisions)
    env_logger::init();

    println!("=== Geobox - Getting Started ===\n");

    // === GEOCODING ===
    println!("1. Geocoding a Point");
    println!("--------------------");

    let sf = LatLng::new(37.781, -122.4113);
    let tags = generate_tags(&sf)?;
    println!("   Tags for {}:", sf);
    for tag in &tags {
        let cell = tag_bounds(tag);
        println!(
            "     {:<10} {:.5} x {:.5} degrees",
            tag.as_str(),
            cell.lat_span(),
            cell.lng_span()
        );
    }
    println!();

    // === NAVIGATION ===
    println!("2. Neighbour Navigation");
    println!("-----------------------");

    let finest = &tags[tags.len() - 1];
    println!("   North of {}: {}", finest, neighbor_north(finest)?);
    println!("   East of {}:  {}", finest, neighbor_east(finest)?);
    println!("   North of 3F carries into the parent: {}\n", neighbor_north("3F")?);

    // === REGION TILING ===
    println!("3. Covering a Region");
    println!("--------------------");

    let regions = [
        ("Union Square", 37.787, -122.409, 37.789, -122.406),
        ("San Francisco", 37.70, -122.52, 37.82, -122.35),
        ("Europe", 35.0, -10.0, 60.0, 30.0),
    ];
    for (name, s, w, n, e) in regions {
        let region = LatLngBounds::new(LatLng::new(s, w), LatLng::new(n, e));
        let cover = tags_for_region(&region)?;
        let names: Vec<&str> = cover.iter().map(|t| t.as_str()).collect();
        println!("   {:<14} -> {:?}", name, names);
    }
    println!();

    // === STORE ===
    println!("4. Storing and Querying Entities");
    println!("--------------------------------");

    let mut store = GeoStore::memory();
    let cities = [
        ("San Francisco", 37.7749, -122.4194),
        ("Oakland", 37.8044, -122.2712),
        ("London", 51.5074, -0.1278),
        ("Paris", 48.8566, 2.3522),
    ];
    for (name, lat, lng) in cities {
        let mut city = Located::new(LatLng::new(lat, lng), name.to_string());
        store.store_entity("city", &mut city)?;
    }
    println!("   Stored {} cities", cities.len());

    let europe = LatLngBounds::new(LatLng::new(40.0, -10.0), LatLng::new(55.0, 10.0));
    let found: Vec<(_, Located<String>)> = store.fetch_within("city", &europe)?;
    println!("   Cities in the European box: {}", found.len());
    for (id, city) in found {
        println!("     - {} ({})", city.data, id);
    }

    println!("\n=== Done ===");
    Ok(())
}
