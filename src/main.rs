use fifo_queue::Queue;
use log::info;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut q: Queue<String> = items().into_iter().collect();
    info!("loaded {} items", q.len());
    println!("{}", render(&q)?);

    let front = q.front()?;
    println!("Front: {}", front);

    let value = q.dequeue()?;
    println!("Dequeued: {}", value);
    println!("{}", q.is_empty());

    q.clear();
    info!("cleared");
    println!("{}", q.is_empty());
    Ok(())
}

fn render(q: &Queue<String>) -> Result<String, serde_json::Error> {
    match env::var("QUEUE_FORMAT").as_deref() {
        Ok("json") => serde_json::to_string(q),
        _ => Ok(q.to_string()),
    }
}

fn items() -> Vec<String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return args;
    }
    env::var("QUEUE_ITEMS")
        .unwrap_or("10,20,30".to_owned())
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_owned())
        .collect()
}
