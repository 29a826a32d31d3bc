use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use roominfo_rpc::config::Config;
use roominfo_rpc::server::{self, ServerError};
use roominfo_rpc::services::client::{
    ClientError, RegistryClient, RoomInfoClient, RoomInfoClientConfig, run_report,
};

const SEEDED_ROOMS: [&str; 5] = ["A101", "A102", "B201", "B202", "C301"];

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    async fn start(config: Config) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server::serve(listener, &config, async {
                rx.await.ok();
            })
            .await
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn client_config(&self) -> RoomInfoClientConfig {
        RoomInfoClientConfig {
            registry_address: self.address(),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
            ..Default::default()
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("Timeout waiting for server shutdown")
            .expect("Server task panicked")
            .expect("Server returned error");
    }
}

async fn resolve_client(server: &TestServer) -> RoomInfoClient {
    timeout(
        Duration::from_secs(5),
        RoomInfoClient::resolve(&server.client_config()),
    )
    .await
    .expect("Timeout resolving service")
    .expect("Failed to resolve service")
}

#[tokio::test]
async fn test_lowercase_query_returns_a101() {
    let server = TestServer::start(Config::default()).await;
    let mut client = resolve_client(&server).await;

    let room = client
        .get_room_info("a101")
        .await
        .expect("Call failed")
        .expect("A101 should exist");
    assert_eq!(room.room_number(), "A101");
    assert_eq!(room.occupant_names(), ["John Doe", "Jane Smith"]);
    assert_eq!(room.warden_contact().name, "Dr. Sarah Johnson");
    assert_eq!(room.warden_contact().phone, "+91-9876543210");
    assert_eq!(room.warden_contact().email, "sarah.j@hostel.edu");

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_seeded_rooms_match_query_and_warden() {
    let server = TestServer::start(Config::default()).await;
    let mut client = resolve_client(&server).await;

    for number in SEEDED_ROOMS {
        let room = client
            .get_room_info(&number.to_lowercase())
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("{number} should exist"));
        assert!(room.room_number().eq_ignore_ascii_case(number));

        let warden = client.get_warden_contact(number).await.unwrap().unwrap();
        assert_eq!(&warden, room.warden_contact().as_ref());
    }

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_unknown_room_is_empty_not_error() {
    let server = TestServer::start(Config::default()).await;
    let mut client = resolve_client(&server).await;

    for number in ["Z999", "", "A1O1"] {
        assert!(client.get_room_info(number).await.unwrap().is_none());
        assert!(client.get_warden_contact(number).await.unwrap().is_none());
    }

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_shared_wardens_and_empty_room() {
    let server = TestServer::start(Config::default()).await;
    let mut client = resolve_client(&server).await;

    let a101 = client.get_warden_contact("A101").await.unwrap().unwrap();
    let a102 = client.get_warden_contact("A102").await.unwrap().unwrap();
    assert_eq!(a101, a102);

    let b201 = client.get_warden_contact("B201").await.unwrap().unwrap();
    let b202 = client.get_warden_contact("B202").await.unwrap().unwrap();
    assert_eq!(b201, b202);
    assert_ne!(a101, b201);

    let c301 = client.get_room_info("C301").await.unwrap().unwrap();
    assert!(c301.occupant_names().is_empty());
    assert_eq!(c301.warden_contact().name, "Dr. Emily Davis");

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_resolve_unbound_name() {
    let server = TestServer::start(Config::default()).await;
    let config = RoomInfoClientConfig {
        service_name: "NoSuchService".to_string(),
        ..server.client_config()
    };

    let err = RoomInfoClient::resolve(&config).await.unwrap_err();
    assert!(matches!(err, ClientError::NameNotFound(ref name) if name == "NoSuchService"));

    server.stop().await;
}

#[tokio::test]
async fn test_unreachable_registry_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RoomInfoClientConfig {
        registry_address: format!("http://{addr}"),
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_secs(1),
        ..Default::default()
    };

    let err = timeout(Duration::from_secs(5), RoomInfoClient::resolve(&config))
        .await
        .expect("Timeout waiting for connect failure")
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_server_binds_into_remote_registry() {
    let registry_server = TestServer::start(Config::default()).await;

    let mut replica_config = Config::default();
    replica_config.server.host_registry = false;
    replica_config.registry.address = registry_server.address();
    replica_config.registry.service_name = "RoomInfoService.Replica".to_string();
    let replica = TestServer::start(replica_config).await;

    let mut registry = RegistryClient::connect(
        &registry_server.address(),
        Duration::from_secs(2),
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    // 等待副本完成绑定
    timeout(Duration::from_secs(5), async {
        loop {
            let names = registry.list().await.unwrap();
            if names.iter().any(|n| n == "RoomInfoService.Replica") {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("Replica never bound");

    assert_eq!(
        registry.list().await.unwrap(),
        vec!["RoomInfoService", "RoomInfoService.Replica"]
    );

    let config = RoomInfoClientConfig {
        service_name: "RoomInfoService.Replica".to_string(),
        ..registry_server.client_config()
    };
    let mut client = RoomInfoClient::resolve(&config).await.unwrap();
    assert_eq!(client.address(), replica.address());
    assert!(client.get_room_info("B202").await.unwrap().is_some());

    registry.unbind("RoomInfoService.Replica").await.unwrap();
    let err = registry.resolve("RoomInfoService.Replica").await.unwrap_err();
    assert!(matches!(err, ClientError::NameNotFound(_)));

    drop(client);
    drop(registry);
    replica.stop().await;
    registry_server.stop().await;
}

#[tokio::test]
async fn test_client_report_output() {
    let server = TestServer::start(Config::default()).await;
    let rooms = vec!["A101".to_string(), "c301".to_string(), "Z999".to_string()];

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(5),
        run_report(&server.client_config(), &rooms, &mut out),
    )
    .await
    .expect("Timeout running report")
    .expect("Report failed");

    let expected = "Room: A101\n\
                    Occupants: John Doe, Jane Smith\n\
                    Warden: Dr. Sarah Johnson\n\
                    Warden Name: Dr. Sarah Johnson\n\
                    Phone: +91-9876543210\n\
                    Email: sarah.j@hostel.edu\n\
                    Room: C301\n\
                    Occupants: (none)\n\
                    Warden: Dr. Emily Davis\n\
                    Warden Name: Dr. Emily Davis\n\
                    Phone: +91-9876543212\n\
                    Email: emily.d@hostel.edu\n\
                    Room Z999: not found\n\
                    Warden contact for Z999: not found\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);

    server.stop().await;
}

#[tokio::test]
async fn test_client_report_with_dead_registry() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RoomInfoClientConfig {
        registry_address: format!("http://{addr}"),
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_secs(1),
        ..Default::default()
    };

    let mut out = Vec::new();
    let err = timeout(
        Duration::from_secs(5),
        run_report(&config, &["A101".to_string()], &mut out),
    )
    .await
    .expect("Timeout waiting for connect failure")
    .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(out.is_empty());
}
