use std::{
    env,
    path::Path,
    process,
};

use gundelik::{
    DailyWordAllocator,
    VocabularyPool,
};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "data/words.json".to_string());
    let pool = match VocabularyPool::from_json_file(Path::new(&path)) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    println!("Loaded {} words from {}", pool.len(), path);

    let mut allocator = DailyWordAllocator::new(pool);

    if !allocator.has_allocation_for_today() && !allocator.can_generate_more() {
        println!("All words have been served. Reset your progress or add more words.");
        return;
    }

    let batch = allocator.todays_batch();
    println!("Today's words ({}):", batch.len());
    for (i, item) in batch.iter().enumerate() {
        println!(
            "{:2}. {} - {} [{}]",
            i + 1,
            item.source_text,
            item.target_text,
            item.levels.join(", ")
        );
    }

    if !allocator.is_persisted() {
        eprintln!("Warning: progress could not be saved and will not survive a restart.");
    }
}
