use simple_logger::SimpleLogger;
use trellor::{Client, List};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // setting up the logger so dispatcher diagnostics reach stdout
    SimpleLogger::new().init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [api_key, oauth_token, board_id, list_name] = args.as_slice() else {
        // needs api_key, oauth_token, board_id and list_name
        std::process::exit(2);
    };

    let client = Client::new(api_key, oauth_token, board_id);

    // find the list ID given the name of a list
    match List::find(&client, list_name).await? {
        Some(list) => println!("List ID: {}", list.id()),
        None => println!("List not found."),
    }

    Ok(())
}
