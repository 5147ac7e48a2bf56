//! Client commands

use clap::Subcommand;

use library_admin::{
    forms::{format_brl, ClientForm},
    models::{page::DEFAULT_PAGE_SIZE, Client, PageRequest},
    AdminApp, AppResult,
};

use super::{or_dash, print_json, print_pager, session};

#[derive(Subcommand)]
pub enum ClientCommand {
    /// List clients
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },

    /// Show one client with their loans
    Show { id: i64 },

    /// Find a client by identity document
    Find { document: String },

    /// Create a client, or update it when --id is given
    Save {
        #[arg(long)]
        id: Option<i64>,

        #[arg(long)]
        document: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a client and their loans
    Delete { id: i64 },
}

pub async fn run(app: &AdminApp, command: ClientCommand, json: bool) -> AppResult<()> {
    session::require(app).await?;
    let clients = &app.services.clients;

    match command {
        ClientCommand::List { page, size } => {
            let page = clients.list_clients(&PageRequest::new(page, size)).await?;
            if json {
                return print_json(&page);
            }
            for client in &page.content {
                println!("{}\t{}\t{}", client.client_id, client.document, client.name);
            }
            print_pager(&page);
        }
        ClientCommand::Show { id } => {
            let client = clients.get_client(id).await?;
            if json {
                return print_json(&client);
            }
            print_client(&client);
        }
        ClientCommand::Find { document } => {
            let client = clients.find_by_document(&document).await?;
            if json {
                return print_json(&client);
            }
            print_client(&client);
        }
        ClientCommand::Save { id, document, name } => {
            let mut form = match id {
                Some(id) => ClientForm::from(&clients.get_client(id).await?),
                None => ClientForm::default(),
            };
            if let Some(document) = document {
                form.document = document;
            }
            if let Some(name) = name {
                form.name = name;
            }

            let saved = clients.save_client(id, &form).await?;
            if json {
                return print_json(&saved);
            }
            match (id, saved) {
                (Some(id), _) => println!("Client {} updated", id),
                (None, Some(client)) => println!("Client {} created", client.client_id),
                (None, None) => println!("Client created"),
            }
        }
        ClientCommand::Delete { id } => {
            clients.delete_client(id).await?;
            println!("Client {} deleted", id);
        }
    }
    Ok(())
}

fn print_client(client: &Client) {
    println!("#{} {}", client.client_id, client.name);
    println!("  Document: {}", client.document);

    if !client.loans.is_empty() {
        println!("  Loans:");
        for loan in &client.loans {
            println!(
                "    {}\t{}\t{}\t{}\t{}",
                loan.loan_id,
                or_dash(loan.loan_start_date.as_deref()),
                or_dash(loan.estimate_loan_return_date.as_deref()),
                loan.total_loan_cost.map(format_brl).unwrap_or_else(|| "-".into()),
                or_dash(loan.loan_status.as_deref()),
            );
        }
    }
}
